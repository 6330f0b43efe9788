use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use monkey_common::{PackageInfo, PackageInfoResolver};
use monkey_fs::{FileSystem, OsFileSystem};
use serde::Deserialize;

const FALLBACK_VERSION: &str = "latest";

#[derive(Deserialize)]
struct PackageManifest {
  version: Option<String>,
}

/// Reads package versions from `node_modules/<name>/package.json` in `root` or any of its
/// ancestors, the way node looks packages up.
pub struct NodeModulesResolver<F: FileSystem = OsFileSystem> {
  root: PathBuf,
  fs: F,
  versions: DashMap<String, String>,
}

impl NodeModulesResolver<OsFileSystem> {
  pub fn new(root: PathBuf) -> Self {
    Self::with_fs(root, OsFileSystem)
  }
}

impl<F: FileSystem> NodeModulesResolver<F> {
  pub fn with_fs(root: PathBuf, fs: F) -> Self {
    Self { root, fs, versions: DashMap::default() }
  }

  fn version_of(&self, name: &str) -> String {
    if let Some(version) = self.versions.get(name) {
      return version.value().clone();
    }
    let version = self.read_version(name).unwrap_or_else(|| {
      tracing::warn!("not found module {name} version, use {name}@{FALLBACK_VERSION}");
      FALLBACK_VERSION.to_string()
    });
    self.versions.insert(name.to_string(), version.clone());
    version
  }

  fn read_version(&self, name: &str) -> Option<String> {
    self.root.ancestors().find_map(|dir| self.read_manifest_version(&manifest_path(dir, name)))
  }

  fn read_manifest_version(&self, manifest: &Path) -> Option<String> {
    if !self.fs.is_file(manifest) {
      return None;
    }
    let parsed = self
      .fs
      .read_to_string(manifest)
      .map_err(anyhow::Error::from)
      .and_then(|content| Ok(serde_json::from_str::<PackageManifest>(&content)?));
    match parsed {
      Ok(manifest) => manifest.version,
      Err(err) => {
        tracing::warn!("failed to read {}: {err}", manifest.display());
        None
      }
    }
  }
}

fn manifest_path(dir: &Path, name: &str) -> PathBuf {
  let mut path = dir.join("node_modules");
  path.extend(name.split('/'));
  path.push("package.json");
  path
}

#[async_trait]
impl<F: FileSystem> PackageInfoResolver for NodeModulesResolver<F> {
  async fn resolve(&self, import_name: &str) -> anyhow::Result<PackageInfo> {
    let (name, resolve_name) = PackageInfo::split_import_name(import_name);
    Ok(PackageInfo {
      name: name.to_string(),
      version: self.version_of(name),
      resolve_name: resolve_name.to_string(),
    })
  }
}
