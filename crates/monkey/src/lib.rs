mod monkey;
mod package_info;
mod plugins;
mod utils;

pub use crate::{
  monkey::Monkey,
  package_info::NodeModulesResolver,
  plugins::{
    external_resource::{
      normalize_function_source, ExternalResourcePlugin, LoaderCall, RuntimeLoader,
    },
    extra_to_bundle::ExtraToBundlePlugin,
    plugins,
    runtime_loader::{RuntimeLoaderPlugin, RUNTIME_LOADER_ID},
  },
  utils::{cdn, normalize_options::normalize_options, render_userscript_header::render_userscript_header},
};
pub use monkey_common::*;
pub use monkey_error::{BuildError, BuildResult, MonkeyError};
pub use monkey_plugin::{
  HookLoadArgs, HookLoadOutput, HookLoadReturn, HookNoopReturn, HookResolveIdArgs,
  HookResolveIdOutput, HookResolveIdReturn, Plugin, PluginDriver, PluginOrder, SharedPlugin,
};
