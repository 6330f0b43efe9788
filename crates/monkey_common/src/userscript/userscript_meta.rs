use monkey_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::GrantPolicy;

/// The metadata block of a userscript. Field order here is the order the header prints in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserscriptMeta {
  pub name: Option<String>,
  pub namespace: Option<String>,
  pub version: Option<String>,
  pub author: Option<String>,
  pub description: Option<String>,
  pub icon: Option<String>,
  pub homepage: Option<String>,
  #[serde(rename = "match")]
  pub matches: Vec<String>,
  pub include: Vec<String>,
  pub exclude: Vec<String>,
  pub require: Vec<String>,
  /// `@resource` entries, resource name to url.
  pub resource: FxIndexMap<String, String>,
  pub connect: Vec<String>,
  pub grant: GrantPolicy,
  #[serde(rename = "run-at", alias = "runAt")]
  pub run_at: Option<String>,
  pub noframes: bool,
  /// Any other `@key value` pair, printed last in declaration order.
  pub extra: Vec<(String, String)>,
}

impl UserscriptMeta {
  /// Records `name -> url` and returns the url previously registered under `name`.
  pub fn register_resource(&mut self, name: String, url: String) -> Option<String> {
    self.resource.insert(name, url)
  }

  /// Every `(key, value)` pair in header order.
  pub fn entries(&self) -> Vec<(&str, String)> {
    let mut entries = vec![];

    let singles = [
      ("name", &self.name),
      ("namespace", &self.namespace),
      ("version", &self.version),
      ("author", &self.author),
      ("description", &self.description),
      ("icon", &self.icon),
      ("homepage", &self.homepage),
    ];
    for (key, value) in singles {
      if let Some(value) = value {
        entries.push((key, value.clone()));
      }
    }

    let lists = [
      ("match", &self.matches),
      ("include", &self.include),
      ("exclude", &self.exclude),
      ("require", &self.require),
    ];
    for (key, values) in lists {
      entries.extend(values.iter().map(|value| (key, value.clone())));
    }

    entries.extend(self.resource.iter().map(|(name, url)| ("resource", format!("{name} {url}"))));
    entries.extend(self.connect.iter().map(|value| ("connect", value.clone())));
    entries.extend(self.grant.header_values().into_iter().map(|value| ("grant", value.to_string())));

    if let Some(run_at) = &self.run_at {
      entries.push(("run-at", run_at.clone()));
    }
    if self.noframes {
      entries.push(("noframes", String::new()));
    }

    entries.extend(self.extra.iter().map(|(key, value)| (key.as_str(), value.clone())));
    entries
  }
}

#[test]
fn test_deserialize() {
  let meta: UserscriptMeta = serde_json::from_str(
    r#"{
      "name": "demo",
      "match": ["https://example.com/*"],
      "grant": "none",
      "run-at": "document-start",
      "extra": [["license", "MIT"]]
    }"#,
  )
  .unwrap();

  assert_eq!(meta.name.as_deref(), Some("demo"));
  assert_eq!(meta.matches, ["https://example.com/*"]);
  assert_eq!(meta.grant, GrantPolicy::None);
  assert_eq!(meta.run_at.as_deref(), Some("document-start"));
  assert_eq!(meta.extra, [("license".to_string(), "MIT".to_string())]);
}

#[test]
fn test_entries_order() {
  let mut meta = UserscriptMeta {
    name: Some("demo".to_string()),
    version: Some("1.0.0".to_string()),
    matches: vec!["*://*/*".to_string()],
    noframes: true,
    ..UserscriptMeta::default()
  };
  assert_eq!(meta.register_resource("logo".to_string(), "https://a/logo.png".to_string()), None);
  assert_eq!(
    meta.register_resource("logo".to_string(), "https://b/logo.png".to_string()).as_deref(),
    Some("https://a/logo.png")
  );
  meta.grant.extend(["GM_getResourceURL"]);

  let keys = meta.entries().into_iter().map(|(key, _)| key).collect::<Vec<_>>();
  assert_eq!(keys, ["name", "version", "match", "resource", "grant", "noframes"]);
  assert_eq!(meta.entries()[3].1, "logo https://b/logo.png");
}
