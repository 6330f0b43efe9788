use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
  ResourceName,
  ResourceUrl,
  NodeLoader,
}

impl Display for ResourceField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::ResourceName => write!(f, "resourceName"),
      Self::ResourceUrl => write!(f, "resourceUrl"),
      Self::NodeLoader => write!(f, "nodeLoader"),
    }
  }
}

#[derive(Debug, Error)]
pub enum MonkeyError {
  #[error("module: {import_name} not found loader")]
  UnsupportedResourceType { import_name: String },

  #[error("no js chunk found in the bundle, cannot attach the userscript header")]
  MissingProgramChunk,

  #[error("`{field}` of external resource `{import_name}` failed")]
  ResourceCallback {
    import_name: String,
    field: ResourceField,
    #[source]
    source: anyhow::Error,
  },

  #[error("generated code of `{id}` is not valid javascript: {reason}")]
  InvalidGeneratedCode { id: String, reason: String },

  #[error("failed to minify css: {reason}")]
  InvalidCss { reason: String },
}

#[test]
fn test_error_messages() {
  let err = MonkeyError::UnsupportedResourceType { import_name: "a.xyz".to_string() };
  assert_eq!(err.to_string(), "module: a.xyz not found loader");

  let err = MonkeyError::ResourceCallback {
    import_name: "vue".to_string(),
    field: ResourceField::ResourceUrl,
    source: anyhow::anyhow!("offline"),
  };
  assert_eq!(err.to_string(), "`resourceUrl` of external resource `vue` failed");
}
