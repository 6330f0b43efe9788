pub mod external_resource;
pub mod extra_to_bundle;
pub mod runtime_loader;

use std::sync::Arc;

use monkey_plugin::SharedPlugin;

use self::{
  external_resource::ExternalResourcePlugin, extra_to_bundle::ExtraToBundlePlugin,
  runtime_loader::RuntimeLoaderPlugin,
};

/// The plugins a userscript build needs, in the order they should run.
pub fn plugins() -> Vec<SharedPlugin> {
  vec![Arc::new(ExternalResourcePlugin), Arc::new(RuntimeLoaderPlugin), Arc::new(ExtraToBundlePlugin)]
}
