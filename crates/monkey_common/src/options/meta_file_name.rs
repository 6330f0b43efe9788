use serde::Deserialize;

/// Whether, and under which name, the header is also written to its own file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMetaFileName")]
pub enum MetaFileName {
  #[default]
  Disabled,
  /// `<name>.meta.js` next to `<name>.user.js`.
  Default,
  Custom(String),
}

impl MetaFileName {
  /// The file name to emit, if any. `Default` needs `file_name` to end with `.user.js`.
  pub fn resolve(&self, file_name: &str) -> Option<String> {
    let name = match self {
      Self::Disabled => return None,
      Self::Default => file_name.strip_suffix(".user.js").map(|stem| format!("{stem}.meta.js"))?,
      Self::Custom(name) => name.clone(),
    };
    (!name.is_empty()).then_some(name)
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetaFileName {
  Flag(bool),
  Name(String),
}

impl From<RawMetaFileName> for MetaFileName {
  fn from(raw: RawMetaFileName) -> Self {
    match raw {
      RawMetaFileName::Flag(true) => Self::Default,
      RawMetaFileName::Flag(false) => Self::Disabled,
      RawMetaFileName::Name(name) => Self::Custom(name),
    }
  }
}

#[test]
fn test_resolve() {
  assert_eq!(MetaFileName::Disabled.resolve("a.user.js"), None);
  assert_eq!(MetaFileName::Default.resolve("a.user.js").as_deref(), Some("a.meta.js"));
  assert_eq!(MetaFileName::Default.resolve("a.js"), None);
  assert_eq!(MetaFileName::Custom("x.meta.js".to_string()).resolve("a.user.js").as_deref(), Some("x.meta.js"));
  assert_eq!(MetaFileName::Custom(String::new()).resolve("a.user.js"), None);
}

#[test]
fn test_deserialize() {
  let parse = |json: &str| serde_json::from_str::<MetaFileName>(json).unwrap();
  assert_eq!(parse("true"), MetaFileName::Default);
  assert_eq!(parse("false"), MetaFileName::Disabled);
  assert_eq!(parse(r#""a.meta.js""#), MetaFileName::Custom("a.meta.js".to_string()));
}
