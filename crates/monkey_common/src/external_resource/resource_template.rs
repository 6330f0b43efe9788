use crate::ResourceContext;

/// A string with `[name]`, `[version]`, `[resolveName]` and `[importName]` placeholders,
/// e.g. `https://cdn.jsdelivr.net/npm/[name]@[version]/[resolveName]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTemplate {
  template: String,
}

impl ResourceTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn render(&self, ctx: &ResourceContext) -> String {
    self
      .template
      .replace("[name]", &ctx.package.name)
      .replace("[version]", &ctx.package.version)
      .replace("[resolveName]", &ctx.package.resolve_name)
      .replace("[importName]", &ctx.import_name)
  }
}

impl From<&str> for ResourceTemplate {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for ResourceTemplate {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

#[test]
fn test_render() {
  use crate::PackageInfo;

  let ctx = ResourceContext {
    package: PackageInfo {
      name: "element-plus".to_string(),
      version: "2.3.4".to_string(),
      resolve_name: "dist/index.css".to_string(),
    },
    import_name: "element-plus/dist/index.css".to_string(),
  };

  let template = ResourceTemplate::new("https://unpkg.com/[name]@[version]/[resolveName]");
  assert_eq!(template.render(&ctx), "https://unpkg.com/element-plus@2.3.4/dist/index.css");
  assert_eq!(ResourceTemplate::from("[importName]").render(&ctx), "element-plus/dist/index.css");
}
