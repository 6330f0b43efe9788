use serde::Deserialize;

use crate::{ExternalResource, LoaderSource, ResourceFn};

/// The serializable form of an [ExternalResource]: names and urls are [crate::ResourceTemplate]s
/// and loaders are JS source text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalResourceConfig {
  /// Defaults to `[importName]`.
  #[serde(default)]
  pub resource_name: Option<String>,
  pub resource_url: String,
  #[serde(default)]
  pub loader: Option<String>,
  #[serde(default)]
  pub loader_template: Option<String>,
}

impl From<ExternalResourceConfig> for ExternalResource {
  fn from(config: ExternalResourceConfig) -> Self {
    let resource_name = config.resource_name.unwrap_or_else(|| "[importName]".to_string());
    let loader = config
      .loader
      .map(LoaderSource::Function)
      .or_else(|| config.loader_template.map(LoaderSource::Template));

    Self {
      resource_name: ResourceFn::template(resource_name),
      resource_url: ResourceFn::template(config.resource_url),
      loader,
      node_loader: None,
    }
  }
}
