use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
  ExternalResource, NormalizedMonkeyOptions, SharedPackageInfoResolver, UserscriptMeta,
};

/// State of one build, shared by every hook call of that build and dropped afterwards.
///
/// Options are read-only. The userscript header is the only mutable part: loads register
/// resources and grants into it, the bundle hook renders it.
pub struct BuildSession {
  options: Arc<NormalizedMonkeyOptions>,
  userscript: Mutex<UserscriptMeta>,
  package_info_resolver: SharedPackageInfoResolver,
}

pub type SharedBuildSession = Arc<BuildSession>;

impl BuildSession {
  pub fn new(
    options: NormalizedMonkeyOptions,
    package_info_resolver: SharedPackageInfoResolver,
  ) -> Self {
    let userscript = Mutex::new(options.userscript.clone());
    Self { options: Arc::new(options), userscript, package_info_resolver }
  }

  pub fn options(&self) -> &NormalizedMonkeyOptions {
    &self.options
  }

  pub fn external_resource(&self, import_name: &str) -> Option<&ExternalResource> {
    self.options.external_resource.get(import_name)
  }

  pub fn is_external_resource(&self, import_name: &str) -> bool {
    self.options.external_resource.contains_key(import_name)
  }

  pub fn package_info_resolver(&self) -> &SharedPackageInfoResolver {
    &self.package_info_resolver
  }

  /// Last registration of a name wins.
  pub fn register_resource(&self, name: String, url: String) {
    let mut userscript = self.lock_userscript();
    if let Some(previous) = userscript.register_resource(name.clone(), url.clone()) {
      if previous != url {
        tracing::warn!("resource `{name}` was registered as `{previous}`, now overwritten by `{url}`");
      }
    }
  }

  pub fn add_grants(&self, grants: &[&str]) {
    let mut userscript = self.lock_userscript();
    if userscript.grant.extend(grants.iter().copied()) {
      tracing::debug!("grant {grants:?}");
    }
  }

  /// A copy of the header as accumulated so far.
  pub fn userscript(&self) -> UserscriptMeta {
    self.lock_userscript().clone()
  }

  pub fn with_userscript<R>(&self, f: impl FnOnce(&UserscriptMeta) -> R) -> R {
    f(&self.lock_userscript())
  }

  fn lock_userscript(&self) -> MutexGuard<'_, UserscriptMeta> {
    self.userscript.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
