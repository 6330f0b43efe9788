use monkey_utils::{
  mime,
  specifier::{extension, QueryFlags},
};

use crate::plugins::runtime_loader::RUNTIME_LOADER_ID;

/// The named exports of the runtime loader module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeLoader {
  Url,
  Raw,
  Json,
  Css,
}

impl RuntimeLoader {
  pub fn export_name(self) -> &'static str {
    match self {
      Self::Url => "urlLoader",
      Self::Raw => "rawLoader",
      Self::Json => "jsonLoader",
      Self::Css => "cssLoader",
    }
  }

  /// The `@grant`s the loader needs at runtime.
  pub fn grants(self) -> &'static [&'static str] {
    match self {
      Self::Raw | Self::Json => &["GM_getResourceText"],
      Self::Url => &["GM_getResourceURL"],
      Self::Css => &["GM_addStyle", "GM_getResourceText"],
    }
  }
}

/// A call of one runtime loader, the default export of a generated resource module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderCall {
  pub loader: RuntimeLoader,
  pub media_type: Option<String>,
}

impl LoaderCall {
  /// Picks the loader from the query flags and the extension of `import_name`, or `None`
  /// when no rule applies.
  pub fn from_import_name(import_name: &str) -> Option<Self> {
    let request = ResourceRequest { ext: extension(import_name), flags: QueryFlags::parse(import_name) };
    LOADER_RULES.iter().find(|rule| (rule.matches)(&request)).map(|rule| (rule.build)(&request))
  }

  pub fn to_module_code(&self, resource_name: &str) -> anyhow::Result<String> {
    let args = match &self.media_type {
      Some(media_type) => serde_json::to_string(&[resource_name, media_type.as_str()])?,
      None => serde_json::to_string(&[resource_name])?,
    };
    Ok(format!(
      "import {{{} as loader}} from '{RUNTIME_LOADER_ID}';export default loader(...{args})",
      self.loader.export_name()
    ))
  }

  fn new(loader: RuntimeLoader) -> Self {
    Self { loader, media_type: None }
  }

  fn url(media_type: String) -> Self {
    Self { loader: RuntimeLoader::Url, media_type: Some(media_type) }
  }
}

struct ResourceRequest<'a> {
  ext: &'a str,
  flags: QueryFlags<'a>,
}

struct LoaderRule {
  matches: fn(&ResourceRequest<'_>) -> bool,
  build: fn(&ResourceRequest<'_>) -> LoaderCall,
}

// First match wins.
static LOADER_RULES: [LoaderRule; 5] = [
  LoaderRule { matches: has_url_query, build: url_with_any_media_type },
  LoaderRule { matches: has_raw_query, build: |_| LoaderCall::new(RuntimeLoader::Raw) },
  // a json module is read as a whole, never through named exports
  LoaderRule { matches: |req| req.ext == "json", build: |_| LoaderCall::new(RuntimeLoader::Json) },
  LoaderRule { matches: |req| req.ext == "css", build: |_| LoaderCall::new(RuntimeLoader::Css) },
  LoaderRule { matches: |req| mime::is_known_asset_type(req.ext), build: url_with_any_media_type },
];

fn has_url_query(req: &ResourceRequest<'_>) -> bool {
  req.flags.has("url") || req.flags.has("inline")
}

fn has_raw_query(req: &ResourceRequest<'_>) -> bool {
  req.flags.has("raw")
}

fn url_with_any_media_type(req: &ResourceRequest<'_>) -> LoaderCall {
  LoaderCall::url(mime::lookup_or_octet_stream(req.ext))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn loader_of(import_name: &str) -> Option<RuntimeLoader> {
    LoaderCall::from_import_name(import_name).map(|call| call.loader)
  }

  #[test]
  fn query_flags_win_over_extension() {
    assert_eq!(loader_of("data.json?raw"), Some(RuntimeLoader::Raw));
    assert_eq!(loader_of("a.css?inline"), Some(RuntimeLoader::Url));
    assert_eq!(loader_of("a.css?url&raw"), Some(RuntimeLoader::Url));
    assert_eq!(loader_of("a.css?used&raw"), Some(RuntimeLoader::Raw));
  }

  #[test]
  fn extension_rules() {
    assert_eq!(loader_of("data.json"), Some(RuntimeLoader::Json));
    assert_eq!(loader_of("element-plus/dist/index.css"), Some(RuntimeLoader::Css));
    assert_eq!(loader_of("a.txt"), Some(RuntimeLoader::Url));
    assert_eq!(loader_of("a.xyz"), None);
    assert_eq!(loader_of("vue"), None);
  }

  #[test]
  fn media_types() {
    let call = LoaderCall::from_import_name("logo.png").unwrap();
    assert_eq!(call.media_type.as_deref(), Some("image/png"));

    let call = LoaderCall::from_import_name("a.xyz?url").unwrap();
    assert_eq!(call.media_type.as_deref(), Some("application/octet-stream"));

    let call = LoaderCall::from_import_name("a.svg?inline").unwrap();
    assert_eq!(call.media_type.as_deref(), Some("image/svg+xml"));
  }

  #[test]
  fn module_code() {
    let code = LoaderCall::from_import_name("logo.png").unwrap().to_module_code("logo").unwrap();
    assert_eq!(
      code,
      r#"import {urlLoader as loader} from 'virtual:plugin-monkey-loader';export default loader(...["logo","image/png"])"#
    );

    let code = LoaderCall::from_import_name("a.css").unwrap().to_module_code("a\"b").unwrap();
    assert!(code.ends_with(r#"export default loader(...["a\"b"])"#));
  }

  #[test]
  fn grants() {
    assert_eq!(RuntimeLoader::Css.grants(), ["GM_addStyle", "GM_getResourceText"]);
    assert_eq!(RuntimeLoader::Json.grants(), ["GM_getResourceText"]);
    assert_eq!(RuntimeLoader::Url.grants(), ["GM_getResourceURL"]);
  }
}
