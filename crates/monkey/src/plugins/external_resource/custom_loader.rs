use std::sync::LazyLock;

use monkey_common::{LoaderContext, LoaderSource};
use regex::Regex;

static NAMED_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*(async\s+)?function\s*(\*?)\s*[A-Za-z_$][\w$]*\s*\(")
    .expect("named function pattern should be valid")
});

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[(resourceUrl|resourceName|importName|name|version|resolveName)\]")
    .expect("placeholder pattern should be valid")
});

/// Turns `function load(` into `function(` and `async function load(` into
/// `async function(` so a declaration can be called in place. Arrows and anonymous
/// functions are returned unchanged.
pub fn normalize_function_source(source: &str) -> String {
  NAMED_FUNCTION_RE
    .replace(source, |caps: &regex::Captures<'_>| {
      let prefix = if caps.get(1).is_some() { "async function" } else { "function" };
      format!("{prefix}{}(", &caps[2])
    })
    .into_owned()
}

/// The module source for a resource with a runtime loader.
pub fn render_custom_loader(
  loader: &LoaderSource,
  ctx: &LoaderContext,
  resource_name: &str,
) -> anyhow::Result<String> {
  match loader {
    LoaderSource::Function(source) => {
      let function = normalize_function_source(source);
      let ctx = serde_json::to_string(ctx)?;
      Ok(format!("export default ({function})({ctx})"))
    }
    LoaderSource::Template(template) => {
      let expression = PLACEHOLDER_RE.replace_all(template, |caps: &regex::Captures<'_>| {
        let value = match &caps[1] {
          "resourceUrl" => ctx.resource_url.as_str(),
          "resourceName" => resource_name,
          "importName" => ctx.import_name.as_str(),
          "name" => ctx.package.name.as_str(),
          "version" => ctx.package.version.as_str(),
          _ => ctx.package.resolve_name.as_str(),
        };
        serde_json::Value::from(value).to_string()
      });
      Ok(format!("export default {expression}"))
    }
  }
}

#[cfg(test)]
mod tests {
  use monkey_common::PackageInfo;

  use super::*;

  fn ctx() -> LoaderContext {
    LoaderContext {
      resource_url: "https://cdn/a.css".to_string(),
      import_name: "a/a.css".to_string(),
      package: PackageInfo {
        name: "a".to_string(),
        version: "1.0.0".to_string(),
        resolve_name: "a.css".to_string(),
      },
    }
  }

  #[test]
  fn normalizes_named_functions() {
    assert_eq!(normalize_function_source("function load(ctx) { return 1 }"), "function(ctx) { return 1 }");
    assert_eq!(
      normalize_function_source("async function load (ctx) { return 1 }"),
      "async function(ctx) { return 1 }"
    );
    assert_eq!(normalize_function_source("function* gen(ctx) {}"), "function*(ctx) {}");
  }

  #[test]
  fn keeps_arrows_and_anonymous_functions() {
    for source in ["(ctx) => ctx.resourceUrl", "async (ctx) => 1", "function (ctx) { return 1 }"] {
      assert_eq!(normalize_function_source(source), source);
    }
  }

  #[test]
  fn function_loader_is_applied_to_context() {
    let code =
      render_custom_loader(&LoaderSource::function("(ctx) => ctx.resourceUrl"), &ctx(), "a").unwrap();
    assert_eq!(
      code,
      r#"export default ((ctx) => ctx.resourceUrl)({"resourceUrl":"https://cdn/a.css","importName":"a/a.css","name":"a","version":"1.0.0","resolveName":"a.css"})"#
    );
  }

  #[test]
  fn template_loader_inlines_json_strings() {
    let code = render_custom_loader(
      &LoaderSource::template("GM_getResourceText([resourceName]) || fetch([resourceUrl])"),
      &ctx(),
      "a-css",
    )
    .unwrap();
    assert_eq!(code, r#"export default GM_getResourceText("a-css") || fetch("https://cdn/a.css")"#);
  }
}
