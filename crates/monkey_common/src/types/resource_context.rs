use serde::Serialize;

use crate::PackageInfo;

/// Argument of the `resourceName` and `resourceUrl` callbacks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContext {
  #[serde(flatten)]
  pub package: PackageInfo,
  pub import_name: String,
}

/// Argument of a `nodeLoader`, evaluated during the build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLoaderContext {
  #[serde(flatten)]
  pub package: PackageInfo,
  pub resource_name: String,
  pub resource_url: String,
  pub import_name: String,
}

/// Argument of a runtime `loader`. It is embedded as a JSON literal in the generated module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderContext {
  pub resource_url: String,
  pub import_name: String,
  #[serde(flatten)]
  pub package: PackageInfo,
}

#[test]
fn test_loader_context_json() {
  let ctx = LoaderContext {
    resource_url: "https://a/b.css".to_string(),
    import_name: "b/b.css".to_string(),
    package: PackageInfo {
      name: "b".to_string(),
      version: "1.0.0".to_string(),
      resolve_name: "b.css".to_string(),
    },
  };
  assert_eq!(
    serde_json::to_string(&ctx).unwrap(),
    r#"{"resourceUrl":"https://a/b.css","importName":"b/b.css","name":"b","version":"1.0.0","resolveName":"b.css"}"#
  );
}
