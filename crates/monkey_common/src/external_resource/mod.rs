pub mod external_resource_config;
pub mod loader_source;
pub mod resource_fn;
pub mod resource_template;

use std::fmt::Debug;

use serde::Deserialize;

use crate::{ExternalResourceConfig, LoaderSource, NodeLoaderFn, ResourceFn};

/// How one declared import specifier becomes a `@resource` entry plus the module that reads it.
#[derive(Clone, Deserialize)]
#[serde(from = "ExternalResourceConfig")]
pub struct ExternalResource {
  pub resource_name: ResourceFn,
  pub resource_url: ResourceFn,
  /// JS evaluated in the userscript at runtime with the resource context.
  pub loader: Option<LoaderSource>,
  /// Evaluated during the build, its output is the module source.
  pub node_loader: Option<NodeLoaderFn>,
}

impl ExternalResource {
  pub fn new(resource_name: ResourceFn, resource_url: ResourceFn) -> Self {
    Self { resource_name, resource_url, loader: None, node_loader: None }
  }

  #[must_use]
  pub fn with_loader(mut self, loader: LoaderSource) -> Self {
    self.loader = Some(loader);
    self
  }

  #[must_use]
  pub fn with_node_loader(mut self, node_loader: NodeLoaderFn) -> Self {
    self.node_loader = Some(node_loader);
    self
  }
}

impl Debug for ExternalResource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ExternalResource")
      .field("loader", &self.loader)
      .field("node_loader", &self.node_loader.is_some())
      .finish_non_exhaustive()
  }
}
