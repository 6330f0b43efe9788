use monkey_common::{OutputBundle, SharedBuildSession};

use crate::{
  HookLoadArgs, HookLoadReturn, HookNoopReturn, HookResolveIdArgs, HookResolveIdReturn,
  PluginOrder, SharedPlugin,
};

/// Runs the hooks of a plugin list against one build session.
pub struct PluginDriver {
  session: SharedBuildSession,
  plugins: Vec<SharedPlugin>,
}

impl PluginDriver {
  /// `Pre` plugins run first and `Post` plugins last; the given order is kept otherwise.
  pub fn new(session: SharedBuildSession, mut plugins: Vec<SharedPlugin>) -> Self {
    plugins.sort_by_key(|plugin| match plugin.order() {
      Some(PluginOrder::Pre) => 0,
      None => 1,
      Some(PluginOrder::Post) => 2,
    });
    Self { session, plugins }
  }

  pub fn session(&self) -> &SharedBuildSession {
    &self.session
  }

  pub fn plugin_names(&self) -> Vec<String> {
    self.plugins.iter().map(|plugin| plugin.name().into_owned()).collect()
  }

  pub async fn resolve_id(&self, args: &HookResolveIdArgs<'_>) -> HookResolveIdReturn {
    for plugin in &self.plugins {
      if let Some(output) = plugin.resolve_id(&self.session, args).await? {
        tracing::trace!("`{}` resolved {:?} to {:?}", plugin.name(), args.specifier, output.id);
        return Ok(Some(output));
      }
    }
    Ok(None)
  }

  pub async fn load(&self, args: &HookLoadArgs<'_>) -> HookLoadReturn {
    for plugin in &self.plugins {
      if let Some(output) = plugin.load(&self.session, args).await? {
        tracing::trace!("`{}` loaded {:?}", plugin.name(), args.id);
        return Ok(Some(output));
      }
    }
    Ok(None)
  }

  pub async fn generate_bundle(&self, bundle: &mut OutputBundle) -> HookNoopReturn {
    for plugin in &self.plugins {
      plugin.generate_bundle(&self.session, bundle).await?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::{borrow::Cow, path::PathBuf, sync::Arc};

  use async_trait::async_trait;
  use monkey_common::{
    BuildSession, HeaderFormat, MetaFileName, NormalizedMonkeyOptions, PackageInfo,
    PackageInfoResolver, UserscriptMeta,
  };

  use super::*;
  use crate::{HookLoadOutput, HookResolveIdOutput, Plugin};

  struct NoopResolver;

  #[async_trait]
  impl PackageInfoResolver for NoopResolver {
    async fn resolve(&self, import_name: &str) -> anyhow::Result<PackageInfo> {
      Ok(PackageInfo {
        name: import_name.to_string(),
        version: "latest".to_string(),
        resolve_name: String::new(),
      })
    }
  }

  struct Named(&'static str, Option<PluginOrder>);

  #[async_trait]
  impl Plugin for Named {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed(self.0)
    }

    fn order(&self) -> Option<PluginOrder> {
      self.1
    }

    async fn resolve_id(
      &self,
      _session: &BuildSession,
      args: &HookResolveIdArgs<'_>,
    ) -> HookResolveIdReturn {
      Ok((args.specifier == "x").then(|| HookResolveIdOutput { id: self.0.into() }))
    }

    async fn load(&self, _session: &BuildSession, args: &HookLoadArgs<'_>) -> HookLoadReturn {
      Ok((args.id == self.0).then(|| HookLoadOutput { code: format!("// {}", self.0) }))
    }
  }

  fn driver(plugins: Vec<SharedPlugin>) -> PluginDriver {
    let options = NormalizedMonkeyOptions {
      root: PathBuf::from("/"),
      userscript: UserscriptMeta::default(),
      format: HeaderFormat::default(),
      file_name: "a.user.js".to_string(),
      meta_file_name: MetaFileName::Disabled,
      minify: false,
      minify_css: true,
      external_resource: Default::default(),
    };
    PluginDriver::new(Arc::new(BuildSession::new(options, Arc::new(NoopResolver))), plugins)
  }

  #[tokio::test]
  async fn runs_pre_plugins_first() {
    let driver = driver(vec![
      Arc::new(Named("post", Some(PluginOrder::Post))),
      Arc::new(Named("normal", None)),
      Arc::new(Named("pre-a", Some(PluginOrder::Pre))),
      Arc::new(Named("pre-b", Some(PluginOrder::Pre))),
    ]);
    assert_eq!(driver.plugin_names(), ["pre-a", "pre-b", "normal", "post"]);

    let resolved = driver.resolve_id(&HookResolveIdArgs { specifier: "x" }).await;
    assert_eq!(resolved.unwrap().unwrap().id.as_str(), "pre-a");

    let unresolved = driver.resolve_id(&HookResolveIdArgs { specifier: "y" }).await;
    assert!(unresolved.unwrap().is_none());

    let loaded = driver.load(&HookLoadArgs { id: "normal" }).await;
    assert_eq!(loaded.unwrap().unwrap().code, "// normal");
  }
}
