use std::path::PathBuf;

use monkey_utils::indexmap::FxIndexMap;

use crate::{ExternalResource, HeaderFormat, MetaFileName, UserscriptMeta};

#[derive(Debug)]
pub struct NormalizedMonkeyOptions {
  pub root: PathBuf,
  /// The header as configured, before any resource or grant is added during the build.
  pub userscript: UserscriptMeta,
  pub format: HeaderFormat,
  pub file_name: String,
  pub meta_file_name: MetaFileName,
  pub minify: bool,
  pub minify_css: bool,
  pub external_resource: FxIndexMap<String, ExternalResource>,
}

impl NormalizedMonkeyOptions {
  /// Css is minified here only when nothing else will do it.
  pub fn should_minify_css(&self) -> bool {
    !self.minify && self.minify_css
  }
}
