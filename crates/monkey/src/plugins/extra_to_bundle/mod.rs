mod inject_template;

use std::borrow::Cow;

use arcstr::ArcStr;
use async_trait::async_trait;
use itertools::Itertools;
use monkey_common::{BuildSession, Output, OutputBundle};
use monkey_compiler::{CssCompiler, EcmaCompiler};
use monkey_error::MonkeyError;
use monkey_plugin::{HookNoopReturn, Plugin, PluginOrder};

use crate::utils::render_userscript_header::render_userscript_header;

pub use self::inject_template::render_css_inject;

/// Finishes the bundle: css assets are folded into the js chunk, which gets the userscript
/// header, and the header may be emitted on its own as well.
#[derive(Debug, Default)]
pub struct ExtraToBundlePlugin;

#[async_trait]
impl Plugin for ExtraToBundlePlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("monkey:extra-to-bundle")
  }

  fn order(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Post)
  }

  async fn generate_bundle(&self, session: &BuildSession, bundle: &mut OutputBundle) -> HookNoopReturn {
    let inject_css_code = take_css(bundle)
      .map(|css| {
        let css = if session.options().should_minify_css() { CssCompiler::minify(&css)? } else { css };
        EcmaCompiler::minify("inject-css.js", &render_css_inject(&css)?)
      })
      .transpose()?;

    let chunk_name = program_chunk_name(bundle).ok_or(MonkeyError::MissingProgramChunk)?;

    let header = userscript_header(session);
    if let Some(Output::Chunk(chunk)) = bundle.get_mut(&chunk_name) {
      chunk.code = [Some(header), Some(time_tag()), inject_css_code, Some(std::mem::take(&mut chunk.code))]
        .into_iter()
        .flatten()
        .filter(|piece| !piece.is_empty())
        .join("\n\n");
      tracing::debug!("attached userscript header to `{chunk_name}`");
    }

    let options = session.options();
    if let Some(meta_file_name) = options.meta_file_name.resolve(&options.file_name) {
      tracing::debug!("emit `{meta_file_name}`");
      bundle.emit_asset(meta_file_name, userscript_header(session));
    }

    Ok(())
  }
}

/// The entry `.js` chunk, or the first `.js` chunk when the host marks none as entry.
fn program_chunk_name(bundle: &OutputBundle) -> Option<ArcStr> {
  let js_chunks = || {
    bundle
      .iter()
      .filter_map(Output::as_chunk)
      .filter(|chunk| chunk.filename.ends_with(".js"))
  };
  js_chunks()
    .find(|chunk| chunk.is_entry)
    .or_else(|| js_chunks().next())
    .map(|chunk| chunk.filename.clone())
}

/// Removes every css asset and returns their contents joined in bundle order, or `None` if
/// there was no css asset.
fn take_css(bundle: &mut OutputBundle) -> Option<String> {
  let css_names = bundle
    .iter()
    .filter(|output| output.filename().ends_with(".css") && matches!(output, Output::Asset(_)))
    .map(|output| ArcStr::from(output.filename()))
    .collect::<Vec<_>>();

  if css_names.is_empty() {
    return None;
  }

  let css = css_names
    .iter()
    .filter_map(|name| bundle.remove(name))
    .map(|output| match output {
      Output::Asset(asset) => asset.source,
      Output::Chunk(chunk) => chunk.code,
    })
    .collect::<String>();
  Some(css)
}

fn userscript_header(session: &BuildSession) -> String {
  session.with_userscript(|meta| render_userscript_header(meta, &session.options().format))
}

fn time_tag() -> String {
  let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
  format!("// use {}@{} at {now}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[test]
fn test_time_tag() {
  let tag = time_tag();
  assert!(tag.starts_with(concat!("// use monkey@", env!("CARGO_PKG_VERSION"), " at ")));
  assert!(tag.ends_with('Z'));
}

#[test]
fn test_take_css_keeps_order() {
  use monkey_common::{OutputAsset, OutputChunk};

  let mut bundle = OutputBundle::new([
    OutputAsset { filename: "style.css".into(), source: "a{}".to_string() }.into(),
    OutputChunk { filename: "index.user.js".into(), code: String::new(), is_entry: true }.into(),
    OutputAsset { filename: "extra.css".into(), source: "b{}".to_string() }.into(),
  ]);

  assert_eq!(take_css(&mut bundle).as_deref(), Some("a{}b{}"));
  assert_eq!(bundle.filenames().collect::<Vec<_>>(), ["index.user.js"]);
  assert_eq!(take_css(&mut bundle), None);
}

#[test]
fn test_program_chunk_prefers_entry() {
  use monkey_common::{OutputAsset, OutputChunk};

  let chunk = |filename: &str, is_entry| -> Output {
    OutputChunk { filename: filename.into(), code: String::new(), is_entry }.into()
  };
  let mut bundle = OutputBundle::new([
    OutputAsset { filename: "a.js".into(), source: String::new() }.into(),
    chunk("lazy.js", false),
    chunk("index.user.js", true),
  ]);
  assert_eq!(program_chunk_name(&bundle).as_deref(), Some("index.user.js"));

  bundle.remove("index.user.js");
  assert_eq!(program_chunk_name(&bundle).as_deref(), Some("lazy.js"));

  bundle.remove("lazy.js");
  assert_eq!(program_chunk_name(&bundle), None);
}
