use arcstr::ArcStr;

const MARKER: char = '\0';

/// The id an external resource import is resolved to: the import name wrapped in `\0` on
/// both ends, which keeps other plugins from treating it as a file.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct VirtualModuleId(ArcStr);

impl VirtualModuleId {
  pub fn new(import_name: &str) -> Self {
    let mut id = String::with_capacity(import_name.len() + 2);
    id.push(MARKER);
    id.push_str(import_name);
    id.push(MARKER);
    Self(id.into())
  }

  /// The import name inside `id`, if `id` has exactly the virtual shape.
  pub fn unwrap_import_name(id: &str) -> Option<&str> {
    id.strip_prefix(MARKER)?.strip_suffix(MARKER)
  }

  pub fn import_name(&self) -> &str {
    Self::unwrap_import_name(&self.0).unwrap_or_default()
  }

  pub fn as_arc_str(&self) -> &ArcStr {
    &self.0
  }

  pub fn into_arc_str(self) -> ArcStr {
    self.0
  }
}

impl std::ops::Deref for VirtualModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for VirtualModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

#[test]
fn test_virtual_module_id() {
  let id = VirtualModuleId::new("a.css?inline");
  assert_eq!(&*id, "\0a.css?inline\0");
  assert_eq!(id.import_name(), "a.css?inline");

  assert_eq!(VirtualModuleId::unwrap_import_name("\0x\0"), Some("x"));
  assert_eq!(VirtualModuleId::unwrap_import_name("\0x"), None);
  assert_eq!(VirtualModuleId::unwrap_import_name("x\0"), None);
  assert_eq!(VirtualModuleId::unwrap_import_name("\0"), None);
}
