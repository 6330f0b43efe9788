use std::path::PathBuf;

use monkey_common::{MonkeyOptions, NormalizedMonkeyOptions};
use monkey_utils::sanitize_file_name::sanitize_file_name;

pub fn normalize_options(raw_options: MonkeyOptions) -> NormalizedMonkeyOptions {
  let userscript = raw_options.userscript.unwrap_or_default();
  let build = raw_options.build.unwrap_or_default();

  let file_name = build.file_name.unwrap_or_else(|| {
    let name = userscript.name.as_deref().map(sanitize_file_name).filter(|name| !name.is_empty());
    format!("{}.user.js", name.as_deref().unwrap_or("monkey"))
  });

  NormalizedMonkeyOptions {
    root: raw_options
      .root
      .or_else(|| std::env::current_dir().ok())
      .unwrap_or_else(|| PathBuf::from(".")),
    userscript,
    format: raw_options.format.unwrap_or_default(),
    file_name,
    meta_file_name: build.meta_file_name.unwrap_or_default(),
    minify: raw_options.minify.unwrap_or(false),
    minify_css: build.minify_css.unwrap_or(true),
    external_resource: build.external_resource.unwrap_or_default(),
  }
}
