use std::borrow::Cow;

use itertools::Itertools;
use monkey_common::{HeaderFormat, UserscriptMeta};
use monkey_utils::concat_string;

/// Renders the `// ==UserScript==` block. The output depends only on the arguments, so
/// rendering the same metadata twice yields identical text.
pub fn render_userscript_header(meta: &UserscriptMeta, format: &HeaderFormat) -> String {
  let entries = meta.entries();
  let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or_default() + format.align.max(1);

  let mut lines = Vec::with_capacity(entries.len() + 2);
  lines.push("// ==UserScript==".to_string());
  for (key, value) in &entries {
    let key = single_line(key);
    let value = single_line(value);
    if value.is_empty() {
      lines.push(concat_string!("// @", key));
    } else {
      lines.push(format!("// @{key:<width$}{value}"));
    }
  }
  lines.push("// ==/UserScript==".to_string());

  lines.join("\n")
}

/// A line break inside a value would start a new `// @` line, so it becomes a space.
fn single_line(value: &str) -> Cow<'_, str> {
  if value.contains(['\n', '\r']) {
    Cow::Owned(value.split(['\r', '\n']).filter(|part| !part.is_empty()).join(" "))
  } else {
    Cow::Borrowed(value)
  }
}

#[cfg(test)]
mod tests {
  use monkey_common::GrantPolicy;

  use super::*;

  #[test]
  fn aligns_values() {
    let mut meta = UserscriptMeta {
      name: Some("demo".to_string()),
      namespace: Some("npm/demo".to_string()),
      matches: vec!["https://example.com/*".to_string()],
      grant: GrantPolicy::List(vec!["GM_addStyle".to_string()]),
      noframes: true,
      ..UserscriptMeta::default()
    };
    meta.register_resource("logo".to_string(), "https://cdn/logo.png".to_string());

    let header = render_userscript_header(&meta, &HeaderFormat::default());
    assert_eq!(
      header,
      [
        "// ==UserScript==",
        "// @name       demo",
        "// @namespace  npm/demo",
        "// @match      https://example.com/*",
        "// @resource   logo https://cdn/logo.png",
        "// @grant      GM_addStyle",
        "// @noframes",
        "// ==/UserScript==",
      ]
      .join("\n")
    );
  }

  #[test]
  fn renders_sentinel_grants() {
    let meta = UserscriptMeta { grant: GrantPolicy::None, ..UserscriptMeta::default() };
    let header = render_userscript_header(&meta, &HeaderFormat { align: 1 });
    assert_eq!(header, "// ==UserScript==\n// @grant none\n// ==/UserScript==");

    let meta = UserscriptMeta { grant: GrantPolicy::All, ..UserscriptMeta::default() };
    let header = render_userscript_header(&meta, &HeaderFormat { align: 0 });
    assert!(header.contains("// @grant *\n"));
    assert_eq!(header, render_userscript_header(&meta, &HeaderFormat { align: 1 }));
  }

  #[test]
  fn line_breaks_stay_inside_their_entry() {
    let meta = UserscriptMeta {
      name: Some("demo\n// @grant        *".to_string()),
      extra: vec![("license".to_string(), "MIT\r\nApache-2.0".to_string())],
      ..UserscriptMeta::default()
    };
    let header = render_userscript_header(&meta, &HeaderFormat::default());
    assert_eq!(
      header,
      [
        "// ==UserScript==",
        "// @name     demo // @grant        *",
        "// @license  MIT Apache-2.0",
        "// ==/UserScript==",
      ]
      .join("\n")
    );
  }

  #[test]
  fn is_deterministic() {
    let meta = UserscriptMeta {
      name: Some("demo".to_string()),
      extra: vec![("license".to_string(), "MIT".to_string())],
      ..UserscriptMeta::default()
    };
    let format = HeaderFormat::default();
    assert_eq!(render_userscript_header(&meta, &format), render_userscript_header(&meta, &format));
  }
}
