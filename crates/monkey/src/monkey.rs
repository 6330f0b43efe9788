use std::sync::Arc;

use arcstr::ArcStr;
use monkey_common::{
  BuildSession, MonkeyOptions, OutputBundle, SharedBuildSession, SharedPackageInfoResolver,
};
use monkey_error::BuildResult;
use monkey_plugin::{HookLoadArgs, HookResolveIdArgs, PluginDriver, SharedPlugin};

use crate::{package_info::NodeModulesResolver, utils::normalize_options::normalize_options};

/// One userscript build. The host calls [Monkey::resolve_id] and [Monkey::load] while it
/// builds its module graph, then [Monkey::generate_bundle] once with the rendered output.
pub struct Monkey {
  plugin_driver: PluginDriver,
}

impl Monkey {
  pub fn new(options: MonkeyOptions) -> Self {
    let options = normalize_options(options);
    let resolver: SharedPackageInfoResolver = Arc::new(NodeModulesResolver::new(options.root.clone()));
    Self::from_parts(BuildSession::new(options, resolver), crate::plugins())
  }

  pub fn with_package_info_resolver(
    options: MonkeyOptions,
    resolver: SharedPackageInfoResolver,
  ) -> Self {
    Self::from_parts(BuildSession::new(normalize_options(options), resolver), crate::plugins())
  }

  /// Runs `extra_plugins` alongside the built-in ones, ordered by [monkey_plugin::PluginOrder].
  #[must_use]
  pub fn with_plugins(self, extra_plugins: Vec<SharedPlugin>) -> Self {
    let session = Arc::clone(self.plugin_driver.session());
    let mut plugins = crate::plugins();
    plugins.extend(extra_plugins);
    Self { plugin_driver: PluginDriver::new(session, plugins) }
  }

  fn from_parts(session: BuildSession, plugins: Vec<SharedPlugin>) -> Self {
    Self { plugin_driver: PluginDriver::new(Arc::new(session), plugins) }
  }

  pub fn session(&self) -> &SharedBuildSession {
    self.plugin_driver.session()
  }

  pub fn plugin_driver(&self) -> &PluginDriver {
    &self.plugin_driver
  }

  pub async fn resolve_id(&self, specifier: &str) -> BuildResult<Option<ArcStr>> {
    let args = HookResolveIdArgs { specifier };
    Ok(self.plugin_driver.resolve_id(&args).await?.map(|output| output.id))
  }

  pub async fn load(&self, id: &str) -> BuildResult<Option<String>> {
    Ok(self.plugin_driver.load(&HookLoadArgs { id }).await?.map(|output| output.code))
  }

  pub async fn generate_bundle(&self, bundle: &mut OutputBundle) -> BuildResult<()> {
    self.plugin_driver.generate_bundle(bundle).await
  }
}
