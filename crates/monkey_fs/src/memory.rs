use std::{
  io::{self, Write},
  path::Path,
};

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// An in-memory file system, mostly useful for tests.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: MemoryFS::new().into() }
  }
}

impl MemoryFileSystem {
  pub fn new(files: &[(&str, &str)]) -> io::Result<Self> {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(Path::new(path), content)?;
    }
    Ok(fs)
  }

  pub fn add_file(&self, path: &Path, content: &str) -> io::Result<()> {
    let file = self.vfs_path(path)?;
    file.parent().create_dir_all().map_err(io::Error::other)?;
    let mut writer = file.create_file().map_err(io::Error::other)?;
    writer.write_all(content.as_bytes())
  }

  fn vfs_path(&self, path: &Path) -> io::Result<VfsPath> {
    let path = path.to_string_lossy().replace('\\', "/");
    self.root.join(path.trim_start_matches('/')).map_err(io::Error::other)
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let file = self.vfs_path(path)?;
    if !file.is_file().unwrap_or(false) {
      return Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()));
    }
    file.read_to_string().map_err(io::Error::other)
  }

  fn is_file(&self, path: &Path) -> bool {
    self.vfs_path(path).is_ok_and(|file| file.is_file().unwrap_or(false))
  }
}

#[test]
fn test_memory_file_system() {
  let fs = MemoryFileSystem::new(&[("/project/node_modules/vue/package.json", "{}")]).unwrap();
  assert!(fs.is_file(Path::new("/project/node_modules/vue/package.json")));
  assert!(!fs.is_file(Path::new("/project/node_modules/vue")));
  assert!(!fs.is_file(Path::new("/project/node_modules/react/package.json")));
  assert_eq!(fs.read_to_string(Path::new("/project/node_modules/vue/package.json")).unwrap(), "{}");
}
