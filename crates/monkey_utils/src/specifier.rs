//! Helpers to pick apart an import specifier such as `element-plus/dist/index.css?raw`.

use std::borrow::Cow;

use memchr::{memchr, memrchr};

use crate::indexmap::FxIndexSet;

/// The specifier without anything after the first `?`.
pub fn strip_query(specifier: &str) -> &str {
  memchr(b'?', specifier.as_bytes()).map_or(specifier, |idx| &specifier[..idx])
}

/// The text after the last `.` of the file name, empty when the file name has none.
pub fn extension(specifier: &str) -> &str {
  let path = strip_query(specifier);
  let file_name = path.rsplit('/').next().unwrap_or(path);
  file_name.rfind('.').map_or("", |idx| &file_name[idx + 1..])
}

/// Rewrites the `.css?used&` marker that vite appends when it re-requests a css module
/// back into the specifier the user wrote. Only the first occurrence is touched.
pub fn normalize_css_requery(specifier: &str) -> Cow<'_, str> {
  if specifier.contains(".css?used&") {
    Cow::Owned(specifier.replacen(".css?used&", ".css?", 1))
  } else {
    Cow::Borrowed(specifier)
  }
}

/// Presence-only view over the query of a specifier. Values are ignored, `?url=1` and
/// `?url` are the same flag.
#[derive(Debug, Default)]
pub struct QueryFlags<'a> {
  flags: FxIndexSet<&'a str>,
}

impl<'a> QueryFlags<'a> {
  pub fn parse(specifier: &'a str) -> Self {
    let Some(idx) = memrchr(b'?', specifier.as_bytes()) else {
      return Self::default();
    };
    let flags = specifier[idx + 1..]
      .split('&')
      .filter_map(|pair| pair.split('=').next())
      .filter(|key| !key.is_empty())
      .collect();
    Self { flags }
  }

  pub fn has(&self, flag: &str) -> bool {
    self.flags.contains(flag)
  }

  pub fn is_empty(&self) -> bool {
    self.flags.is_empty()
  }
}

#[test]
fn test_extension() {
  assert_eq!(extension("a/b/c.png"), "png");
  assert_eq!(extension("a/b/c.json?raw"), "json");
  assert_eq!(extension("pkg.name/index.min.css?inline&x=1"), "css");
  assert_eq!(extension("vue"), "");
  assert_eq!(extension("lodash.merge/index"), "");
}

#[test]
fn test_query_flags() {
  let flags = QueryFlags::parse("data.json?raw");
  assert!(flags.has("raw"));
  assert!(!flags.has("url"));

  let flags = QueryFlags::parse("a.png?x=1?url=yes&inline");
  assert!(flags.has("url"));
  assert!(flags.has("inline"));
  assert!(!flags.has("x"));

  assert!(QueryFlags::parse("raw").is_empty());
  assert!(QueryFlags::parse("a.css?").is_empty());
}

#[test]
fn test_normalize_css_requery() {
  assert_eq!(normalize_css_requery("a.css?used&inline"), "a.css?inline");
  assert_eq!(normalize_css_requery("a.css?inline"), "a.css?inline");
  assert!(matches!(normalize_css_requery("a.png"), Cow::Borrowed(_)));
}
