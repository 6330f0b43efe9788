use serde::Deserialize;

/// The `@grant` declaration of a userscript.
///
/// `All` (`*`) and `None` (`none`) are sentinels that absorb any further grant, only `List`
/// grows. Entries keep their insertion order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawGrant")]
pub enum GrantPolicy {
  All,
  None,
  List(Vec<String>),
}

impl Default for GrantPolicy {
  fn default() -> Self {
    Self::List(vec![])
  }
}

impl GrantPolicy {
  /// Appends `grants` when this is a `List`. Returns whether anything was appended.
  pub fn extend<I, S>(&mut self, grants: I) -> bool
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    match self {
      Self::List(list) => {
        let len = list.len();
        list.extend(grants.into_iter().map(Into::into));
        list.len() > len
      }
      Self::All | Self::None => false,
    }
  }

  pub fn as_list(&self) -> Option<&[String]> {
    match self {
      Self::List(list) => Some(list),
      Self::All | Self::None => None,
    }
  }

  /// Values as they appear after `@grant` in the header.
  pub fn header_values(&self) -> Vec<&str> {
    match self {
      Self::All => vec!["*"],
      Self::None => vec!["none"],
      Self::List(list) => list.iter().map(String::as_str).collect(),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGrant {
  One(String),
  Many(Vec<String>),
}

impl From<RawGrant> for GrantPolicy {
  fn from(raw: RawGrant) -> Self {
    match raw {
      RawGrant::One(grant) if grant == "*" => Self::All,
      RawGrant::One(grant) if grant == "none" => Self::None,
      RawGrant::One(grant) => Self::List(vec![grant]),
      RawGrant::Many(grants) => Self::List(grants),
    }
  }
}

#[test]
fn test_extend() {
  let mut grant = GrantPolicy::List(vec!["GM_info".to_string()]);
  assert!(grant.extend(["GM_addStyle", "GM_getResourceText"]));
  assert!(grant.extend(["GM_getResourceText"]));
  assert_eq!(
    grant.as_list().unwrap(),
    ["GM_info", "GM_addStyle", "GM_getResourceText", "GM_getResourceText"]
  );

  let mut grant = GrantPolicy::All;
  assert!(!grant.extend(["GM_addStyle"]));
  assert_eq!(grant, GrantPolicy::All);

  let mut grant = GrantPolicy::None;
  assert!(!grant.extend(["GM_addStyle"]));
  assert_eq!(grant.header_values(), ["none"]);
}

#[test]
fn test_deserialize() {
  let parse = |json: &str| serde_json::from_str::<GrantPolicy>(json).unwrap();
  assert_eq!(parse(r#""*""#), GrantPolicy::All);
  assert_eq!(parse(r#""none""#), GrantPolicy::None);
  assert_eq!(parse(r#""GM_info""#), GrantPolicy::List(vec!["GM_info".to_string()]));
  assert_eq!(parse(r#"["a","b"]"#), GrantPolicy::List(vec!["a".to_string(), "b".to_string()]));
}
