pub mod build_options;
pub mod header_format;
pub mod meta_file_name;
pub mod normalized_monkey_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{BuildOptions, HeaderFormat, UserscriptMeta};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonkeyOptions {
  /// Where installed packages are looked up from.
  pub root: Option<PathBuf>,
  pub userscript: Option<UserscriptMeta>,
  pub format: Option<HeaderFormat>,
  pub build: Option<BuildOptions>,
  /// Whether the host bundler already minifies its output.
  pub minify: Option<bool>,
}

#[test]
fn test_deserialize_options() {
  use crate::MetaFileName;

  let options: MonkeyOptions = serde_json::from_str(
    r#"{
      "userscript": { "name": "demo", "grant": ["GM_info"] },
      "format": { "align": 4 },
      "build": {
        "fileName": "demo.user.js",
        "metaFileName": true,
        "minifyCss": false,
        "externalResource": {
          "element-plus/dist/index.css": {
            "resourceUrl": "https://unpkg.com/[name]@[version]/[resolveName]"
          }
        }
      }
    }"#,
  )
  .unwrap();

  let build = options.build.unwrap();
  assert_eq!(options.format.map(|f| f.align), Some(4));
  assert_eq!(build.file_name.as_deref(), Some("demo.user.js"));
  assert_eq!(build.meta_file_name, Some(MetaFileName::Default));
  assert_eq!(build.minify_css, Some(false));
  assert!(build.external_resource.unwrap().contains_key("element-plus/dist/index.css"));
}
