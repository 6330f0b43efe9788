mod common;

use std::{borrow::Cow, sync::Arc};

use async_trait::async_trait;
use monkey::{
  BuildOptions, BuildSession, ExternalResource, HookLoadArgs, HookLoadOutput, HookLoadReturn,
  HookResolveIdArgs, HookResolveIdOutput, HookResolveIdReturn, Plugin, ResourceFn,
  UserscriptMeta,
};

use crate::common::monkey_with;

/// Serves every `.css` import from memory, the way a host's own css handling would.
struct HostCssPlugin;

#[async_trait]
impl Plugin for HostCssPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("host:css")
  }

  async fn resolve_id(
    &self,
    _session: &BuildSession,
    args: &HookResolveIdArgs<'_>,
  ) -> HookResolveIdReturn {
    Ok(args.specifier.ends_with(".css").then(|| HookResolveIdOutput { id: args.specifier.into() }))
  }

  async fn load(&self, _session: &BuildSession, args: &HookLoadArgs<'_>) -> HookLoadReturn {
    Ok(args.id.ends_with(".css").then(|| HookLoadOutput { code: "export default ''".to_string() }))
  }
}

#[tokio::test]
async fn host_plugins_run_between_resources_and_bundle() {
  let monkey = monkey_with(
    UserscriptMeta::default(),
    BuildOptions::default(),
    vec![(
      "pkg/style.css",
      ExternalResource::new(ResourceFn::template("style"), ResourceFn::template("https://cdn/style.css")),
    )],
  )
  .with_plugins(vec![Arc::new(HostCssPlugin)]);

  assert_eq!(
    monkey.plugin_driver().plugin_names(),
    ["monkey:external-resource", "monkey:runtime-loader", "host:css", "monkey:extra-to-bundle"]
  );

  let declared = monkey.resolve_id("pkg/style.css").await.unwrap().unwrap();
  assert_eq!(declared.as_str(), "\0pkg/style.css\0");
  assert!(monkey.load(&declared).await.unwrap().unwrap().contains("cssLoader"));

  let local = monkey.resolve_id("src/app.css").await.unwrap().unwrap();
  assert_eq!(local.as_str(), "src/app.css");
  assert_eq!(monkey.load(&local).await.unwrap().as_deref(), Some("export default ''"));
}
