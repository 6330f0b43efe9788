use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use monkey_utils::specifier::strip_query;

/// What is known about the npm package an external resource import points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
  pub name: String,
  pub version: String,
  /// The path inside the package, `dist/index.css` for `element-plus/dist/index.css`.
  pub resolve_name: String,
}

impl PackageInfo {
  /// Splits a query-less import name into package name and sub path. Scoped packages keep
  /// their scope.
  ///
  /// ```ignore
  /// assert_eq!(PackageInfo::split_import_name("@vue/shared/dist/x.js"), ("@vue/shared", "dist/x.js"));
  /// ```
  pub fn split_import_name(import_name: &str) -> (&str, &str) {
    let path = strip_query(import_name);
    let segments = if path.starts_with('@') { 2 } else { 1 };

    let split_at = path.match_indices('/').nth(segments - 1).map(|(idx, _)| idx);
    match split_at {
      Some(idx) => (&path[..idx], &path[idx + 1..]),
      None => (path, ""),
    }
  }
}

/// Looks up [PackageInfo] for an import name.
#[async_trait]
pub trait PackageInfoResolver: Send + Sync {
  async fn resolve(&self, import_name: &str) -> anyhow::Result<PackageInfo>;
}

pub type SharedPackageInfoResolver = Arc<dyn PackageInfoResolver>;

#[test]
fn test_split_import_name() {
  assert_eq!(PackageInfo::split_import_name("vue"), ("vue", ""));
  assert_eq!(PackageInfo::split_import_name("vue?raw"), ("vue", ""));
  assert_eq!(
    PackageInfo::split_import_name("element-plus/dist/index.css?inline"),
    ("element-plus", "dist/index.css")
  );
  assert_eq!(PackageInfo::split_import_name("@vue/shared"), ("@vue/shared", ""));
  assert_eq!(PackageInfo::split_import_name("@vue/shared/dist/x.js"), ("@vue/shared", "dist/x.js"));
}
