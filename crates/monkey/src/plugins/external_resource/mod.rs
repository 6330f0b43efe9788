mod custom_loader;
mod loader_call;

use std::borrow::Cow;

use anyhow::Context;
use async_trait::async_trait;
use monkey_common::{
  BuildSession, ExternalResource, LoaderContext, NodeLoaderContext, PackageInfo, ResourceContext,
  VirtualModuleId,
};
use monkey_compiler::EcmaCompiler;
use monkey_error::{BuildResult, MonkeyError, ResourceField};
use monkey_plugin::{
  HookLoadArgs, HookLoadOutput, HookLoadReturn, HookResolveIdArgs, HookResolveIdOutput,
  HookResolveIdReturn, Plugin, PluginOrder,
};
use monkey_utils::specifier::normalize_css_requery;

pub use self::{
  custom_loader::{normalize_function_source, render_custom_loader},
  loader_call::{LoaderCall, RuntimeLoader},
};

/// Turns imports of declared external resources into `@resource` entries plus a virtual
/// module that reads the resource at runtime.
///
/// It runs before anything else so that css and image imports are not taken by the host's
/// asset handling.
#[derive(Debug, Default)]
pub struct ExternalResourcePlugin;

#[async_trait]
impl Plugin for ExternalResourcePlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("monkey:external-resource")
  }

  fn order(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Pre)
  }

  async fn resolve_id(
    &self,
    session: &BuildSession,
    args: &HookResolveIdArgs<'_>,
  ) -> HookResolveIdReturn {
    let specifier = if session.is_external_resource(args.specifier) {
      Cow::Borrowed(args.specifier)
    } else {
      // vite requests `x.css?inline` again as `x.css?used&inline`
      let normalized = normalize_css_requery(args.specifier);
      if !session.is_external_resource(&normalized) {
        return Ok(None);
      }
      normalized
    };

    let id = VirtualModuleId::new(&specifier);
    tracing::debug!("resolved external resource {specifier:?}");
    Ok(Some(HookResolveIdOutput { id: id.into_arc_str() }))
  }

  async fn load(&self, session: &BuildSession, args: &HookLoadArgs<'_>) -> HookLoadReturn {
    let Some(import_name) = VirtualModuleId::unwrap_import_name(args.id) else {
      return Ok(None);
    };
    // another plugin may use the same id shape
    let Some(resource) = session.external_resource(import_name) else {
      return Ok(None);
    };

    let code = load_external_resource(session, import_name, resource).await?;
    let code = EcmaCompiler::minify(import_name, &code)?;
    Ok(Some(HookLoadOutput { code }))
  }
}

async fn load_external_resource(
  session: &BuildSession,
  import_name: &str,
  resource: &ExternalResource,
) -> BuildResult<String> {
  let package = session
    .package_info_resolver()
    .resolve(import_name)
    .await
    .with_context(|| format!("failed to resolve the package of `{import_name}`"))?;

  let ctx = ResourceContext { package, import_name: import_name.to_string() };
  let resource_name = resource
    .resource_name
    .call(ctx.clone())
    .await
    .map_err(|source| callback_error(import_name, ResourceField::ResourceName, source))?;
  let resource_url = resource
    .resource_url
    .call(ctx.clone())
    .await
    .map_err(|source| callback_error(import_name, ResourceField::ResourceUrl, source))?;

  session.register_resource(resource_name.clone(), resource_url.clone());

  let ResourceContext { package, import_name: _ } = ctx;
  if let Some(node_loader) = &resource.node_loader {
    tracing::debug!("{import_name:?} is generated by its node loader");
    let ctx = NodeLoaderContext {
      package,
      resource_name,
      resource_url,
      import_name: import_name.to_string(),
    };
    return node_loader
      .call(ctx)
      .await
      .map_err(|source| callback_error(import_name, ResourceField::NodeLoader, source).into());
  }

  if let Some(loader) = &resource.loader {
    tracing::debug!("{import_name:?} is generated by its runtime loader");
    let ctx = LoaderContext { resource_url, import_name: import_name.to_string(), package };
    return Ok(render_custom_loader(loader, &ctx, &resource_name)?);
  }

  default_loader_code(session, import_name, &package, &resource_name)
}

fn default_loader_code(
  session: &BuildSession,
  import_name: &str,
  package: &PackageInfo,
  resource_name: &str,
) -> BuildResult<String> {
  let call = LoaderCall::from_import_name(import_name)
    .ok_or_else(|| MonkeyError::UnsupportedResourceType { import_name: import_name.to_string() })?;
  tracing::debug!(
    "{import_name:?} ({}@{}) is read by `{}`",
    package.name,
    package.version,
    call.loader.export_name()
  );

  session.add_grants(call.loader.grants());
  Ok(call.to_module_code(resource_name)?)
}

fn callback_error(import_name: &str, field: ResourceField, source: anyhow::Error) -> MonkeyError {
  MonkeyError::ResourceCallback { import_name: import_name.to_string(), field, source }
}
