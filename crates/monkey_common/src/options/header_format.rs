use serde::Deserialize;

/// Layout of the rendered userscript header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderFormat {
  /// Spaces between the longest `@key` and its value. At least one space is always
  /// written, so `0` renders like `1`.
  pub align: usize,
}

impl Default for HeaderFormat {
  fn default() -> Self {
    Self { align: 2 }
  }
}
