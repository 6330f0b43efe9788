use std::{io, path::Path};

/// The read-only view of a file system needed to inspect installed packages.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn is_file(&self, path: &Path) -> bool;
}
