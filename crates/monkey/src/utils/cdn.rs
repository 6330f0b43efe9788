//! `resourceUrl` presets for public npm CDNs.
//!
//! An empty `path` points at the imported file itself, `[resolveName]` inside the package.

use monkey_common::ResourceFn;

pub fn jsdelivr(path: &str) -> ResourceFn {
  ResourceFn::template(template("https://cdn.jsdelivr.net/npm/[name]@[version]", path))
}

pub fn unpkg(path: &str) -> ResourceFn {
  ResourceFn::template(template("https://unpkg.com/[name]@[version]", path))
}

pub fn npmmirror(path: &str) -> ResourceFn {
  ResourceFn::template(template("https://registry.npmmirror.com/[name]/[version]/files", path))
}

fn template(package_root: &str, path: &str) -> String {
  let path = path.trim_start_matches('/');
  let path = if path.is_empty() { "[resolveName]" } else { path };
  format!("{package_root}/{path}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_template() {
    assert_eq!(
      template("https://cdn.jsdelivr.net/npm/[name]@[version]", ""),
      "https://cdn.jsdelivr.net/npm/[name]@[version]/[resolveName]"
    );
    assert_eq!(
      template("https://unpkg.com/[name]@[version]", "/dist/index.css"),
      "https://unpkg.com/[name]@[version]/dist/index.css"
    );
  }

  #[tokio::test]
  async fn test_presets() {
    use monkey_common::{PackageInfo, ResourceContext};

    let ctx = ResourceContext {
      package: PackageInfo {
        name: "element-plus".to_string(),
        version: "2.3.4".to_string(),
        resolve_name: "dist/index.css".to_string(),
      },
      import_name: "element-plus/dist/index.css".to_string(),
    };
    assert_eq!(
      jsdelivr("").call(ctx.clone()).await.unwrap(),
      "https://cdn.jsdelivr.net/npm/element-plus@2.3.4/dist/index.css"
    );
    assert_eq!(
      npmmirror("theme.css").call(ctx).await.unwrap(),
      "https://registry.npmmirror.com/element-plus/2.3.4/files/theme.css"
    );
  }
}
