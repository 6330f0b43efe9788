use std::{borrow::Cow, sync::Arc};

use async_trait::async_trait;
use monkey_common::{BuildSession, OutputBundle};
use monkey_error::BuildResult;

use crate::{HookLoadArgs, HookLoadOutput, HookResolveIdArgs, HookResolveIdOutput, PluginOrder};

pub type HookResolveIdReturn = BuildResult<Option<HookResolveIdOutput>>;
pub type HookLoadReturn = BuildResult<Option<HookLoadOutput>>;
pub type HookNoopReturn = BuildResult<()>;

/// The hooks a host bundler calls into. Returning `Ok(None)` leaves the decision to the
/// next plugin.
#[async_trait]
pub trait Plugin: Send + Sync {
  fn name(&self) -> Cow<'static, str>;

  fn order(&self) -> Option<PluginOrder> {
    None
  }

  /// Must not mutate the session.
  async fn resolve_id(
    &self,
    _session: &BuildSession,
    _args: &HookResolveIdArgs<'_>,
  ) -> HookResolveIdReturn {
    Ok(None)
  }

  async fn load(&self, _session: &BuildSession, _args: &HookLoadArgs<'_>) -> HookLoadReturn {
    Ok(None)
  }

  /// Called once after every chunk and asset of the build exists.
  async fn generate_bundle(
    &self,
    _session: &BuildSession,
    _bundle: &mut OutputBundle,
  ) -> HookNoopReturn {
    Ok(())
  }
}

pub type SharedPlugin = Arc<dyn Plugin>;
