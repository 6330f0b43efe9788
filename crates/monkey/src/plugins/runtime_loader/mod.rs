use std::borrow::Cow;

use async_trait::async_trait;
use monkey_common::BuildSession;
use monkey_plugin::{
  HookLoadArgs, HookLoadOutput, HookLoadReturn, HookResolveIdArgs, HookResolveIdOutput,
  HookResolveIdReturn, Plugin, PluginOrder,
};

/// The module generated resource imports read their value through.
pub const RUNTIME_LOADER_ID: &str = "virtual:plugin-monkey-loader";

const RESOLVED_RUNTIME_LOADER_ID: &str = "\0virtual:plugin-monkey-loader";

const RUNTIME_LOADER_SOURCE: &str = include_str!("./runtime.js");

/// Serves [RUNTIME_LOADER_ID] to the host bundler.
#[derive(Debug, Default)]
pub struct RuntimeLoaderPlugin;

#[async_trait]
impl Plugin for RuntimeLoaderPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("monkey:runtime-loader")
  }

  fn order(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Pre)
  }

  async fn resolve_id(
    &self,
    _session: &BuildSession,
    args: &HookResolveIdArgs<'_>,
  ) -> HookResolveIdReturn {
    Ok((args.specifier == RUNTIME_LOADER_ID)
      .then(|| HookResolveIdOutput { id: RESOLVED_RUNTIME_LOADER_ID.into() }))
  }

  async fn load(&self, _session: &BuildSession, args: &HookLoadArgs<'_>) -> HookLoadReturn {
    Ok((args.id == RESOLVED_RUNTIME_LOADER_ID)
      .then(|| HookLoadOutput { code: RUNTIME_LOADER_SOURCE.to_string() }))
  }
}

#[test]
fn test_runtime_exports() {
  for export in ["urlLoader", "rawLoader", "jsonLoader", "cssLoader"] {
    assert!(RUNTIME_LOADER_SOURCE.contains(&format!("export const {export} ")));
  }
}
