use std::sync::Arc;

use async_trait::async_trait;
use monkey::{
  BuildOptions, ExternalResource, Monkey, MonkeyOptions, PackageInfo, PackageInfoResolver,
  UserscriptMeta,
};

/// Every package is installed at `1.2.3`.
pub struct FixedVersionResolver;

#[async_trait]
impl PackageInfoResolver for FixedVersionResolver {
  async fn resolve(&self, import_name: &str) -> anyhow::Result<PackageInfo> {
    let (name, resolve_name) = PackageInfo::split_import_name(import_name);
    Ok(PackageInfo {
      name: name.to_string(),
      version: "1.2.3".to_string(),
      resolve_name: resolve_name.to_string(),
    })
  }
}

/// `RUST_LOG=monkey=debug` shows what the plugins decided.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

pub fn monkey_with(
  userscript: UserscriptMeta,
  build: BuildOptions,
  resources: Vec<(&str, ExternalResource)>,
) -> Monkey {
  init_tracing();
  let build = BuildOptions {
    external_resource: Some(
      resources.into_iter().map(|(name, resource)| (name.to_string(), resource)).collect(),
    ),
    ..build
  };
  Monkey::with_package_info_resolver(
    MonkeyOptions { userscript: Some(userscript), build: Some(build), ..MonkeyOptions::default() },
    Arc::new(FixedVersionResolver),
  )
}
