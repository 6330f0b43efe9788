use monkey_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::{ExternalResource, MetaFileName};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
  pub file_name: Option<String>,
  pub meta_file_name: Option<MetaFileName>,
  /// Minify the merged css when the host does not minify.
  pub minify_css: Option<bool>,
  /// Keyed by the exact import specifier, query included.
  pub external_resource: Option<FxIndexMap<String, ExternalResource>>,
}
