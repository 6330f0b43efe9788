mod common;

use monkey::{
  BuildOptions, ExternalResource, GrantPolicy, MetaFileName, MonkeyError, Output, OutputAsset,
  OutputBundle, OutputChunk, ResourceFn, UserscriptMeta, VirtualModuleId,
};

use crate::common::monkey_with;

fn userscript() -> UserscriptMeta {
  UserscriptMeta {
    name: Some("demo".to_string()),
    matches: vec!["https://example.com/*".to_string()],
    ..UserscriptMeta::default()
  }
}

fn chunk(filename: &str, code: &str) -> Output {
  OutputChunk { filename: filename.into(), code: code.to_string(), is_entry: true }.into()
}

fn asset(filename: &str, source: &str) -> Output {
  OutputAsset { filename: filename.into(), source: source.to_string() }.into()
}

fn pieces(code: &str) -> Vec<&str> {
  code.split("\n\n").collect()
}

#[tokio::test]
async fn merges_css_into_the_script() {
  let monkey = monkey_with(
    userscript(),
    BuildOptions { minify_css: Some(false), ..BuildOptions::default() },
    vec![],
  );
  let mut bundle = OutputBundle::new([
    asset("a.css", "a{}"),
    chunk("demo.user.js", "console.log(1);"),
    asset("b.css", "b{}"),
    asset("logo.svg", "<svg/>"),
  ]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  assert_eq!(bundle.filenames().collect::<Vec<_>>(), ["demo.user.js", "logo.svg"]);
  let code = bundle.get("demo.user.js").unwrap().content_as_str();
  let pieces = pieces(code);
  assert_eq!(pieces.len(), 4, "{code}");
  assert!(pieces[0].starts_with("// ==UserScript==\n// @name   demo\n"), "{code}");
  assert!(pieces[0].ends_with("// ==/UserScript=="), "{code}");
  assert!(pieces[1].starts_with("// use monkey@"), "{code}");
  assert!(pieces[2].contains("a{}b{}"), "{code}");
  assert_eq!(pieces[3], "console.log(1);");
}

#[tokio::test]
async fn minifies_css_when_the_host_does_not() {
  let monkey = monkey_with(userscript(), BuildOptions::default(), vec![]);
  let mut bundle = OutputBundle::new([
    asset("a.css", "a {\n  color: red;\n}\n"),
    chunk("demo.user.js", "console.log(1);"),
  ]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  let code = bundle.get("demo.user.js").unwrap().content_as_str();
  assert!(code.contains("a{color:red}"), "{code}");
}

#[tokio::test]
async fn without_css_only_the_header_is_added() {
  let monkey = monkey_with(userscript(), BuildOptions::default(), vec![]);
  let mut bundle = OutputBundle::new([chunk("demo.user.js", "console.log(1);")]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  let code = bundle.get("demo.user.js").unwrap().content_as_str();
  let pieces = pieces(code);
  assert_eq!(pieces.len(), 3, "{code}");
  assert_eq!(pieces[2], "console.log(1);");
}

#[tokio::test]
async fn header_lists_registered_resources_and_grants() {
  let monkey = monkey_with(
    userscript(),
    BuildOptions {
      meta_file_name: Some(MetaFileName::Default),
      file_name: Some("demo.user.js".to_string()),
      ..BuildOptions::default()
    },
    vec![(
      "pkg/logo.png",
      ExternalResource::new(ResourceFn::template("logo"), ResourceFn::template("https://cdn/logo.png")),
    )],
  );
  monkey.load(VirtualModuleId::new("pkg/logo.png").as_arc_str()).await.unwrap();

  let mut bundle = OutputBundle::new([chunk("demo.user.js", "console.log(1);")]);
  monkey.generate_bundle(&mut bundle).await.unwrap();

  let code = bundle.get("demo.user.js").unwrap().content_as_str();
  let header = pieces(code)[0];
  assert_eq!(
    header,
    [
      "// ==UserScript==",
      "// @name      demo",
      "// @match     https://example.com/*",
      "// @resource  logo https://cdn/logo.png",
      "// @grant     GM_getResourceURL",
      "// ==/UserScript==",
    ]
    .join("\n")
  );

  let meta = bundle.get("demo.meta.js").and_then(Output::as_asset).unwrap();
  assert_eq!(meta.source, header);
}

#[tokio::test]
async fn custom_meta_file_name() {
  let monkey = monkey_with(
    UserscriptMeta { grant: GrantPolicy::None, ..userscript() },
    BuildOptions {
      meta_file_name: Some(MetaFileName::Custom("demo.meta.txt".to_string())),
      ..BuildOptions::default()
    },
    vec![],
  );
  let mut bundle = OutputBundle::new([chunk("demo.user.js", "console.log(1);")]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  let meta = bundle.get("demo.meta.txt").unwrap().content_as_str();
  assert!(meta.contains("// @grant  none"), "{meta}");
  assert!(bundle.get("demo.user.js").unwrap().content_as_str().starts_with(meta));
}

#[tokio::test]
async fn no_meta_file_by_default() {
  let monkey = monkey_with(userscript(), BuildOptions::default(), vec![]);
  let mut bundle = OutputBundle::new([chunk("demo.user.js", "")]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  assert_eq!(bundle.len(), 1);
  let pieces = pieces(bundle.get("demo.user.js").unwrap().content_as_str());
  assert_eq!(pieces.len(), 2);
}

#[tokio::test]
async fn requires_a_script_chunk() {
  let monkey = monkey_with(userscript(), BuildOptions::default(), vec![]);
  let mut bundle = OutputBundle::new([asset("a.css", "a{}"), asset("index.html", "<html/>")]);

  let err = monkey.generate_bundle(&mut bundle).await.unwrap_err();

  assert!(err.contains(|e| matches!(e, MonkeyError::MissingProgramChunk)));
}

#[tokio::test]
async fn decorates_the_entry_chunk() {
  let monkey = monkey_with(userscript(), BuildOptions::default(), vec![]);
  let lazy = OutputChunk { filename: "lazy.js".into(), code: "lazy();".to_string(), is_entry: false };
  let mut bundle = OutputBundle::new([lazy.into(), chunk("demo.user.js", "main();")]);

  monkey.generate_bundle(&mut bundle).await.unwrap();

  assert_eq!(bundle.get("lazy.js").unwrap().content_as_str(), "lazy();");
  let code = bundle.get("demo.user.js").unwrap().content_as_str();
  assert!(code.starts_with("// ==UserScript=="), "{code}");
  assert!(code.ends_with("\n\nmain();"), "{code}");
}
