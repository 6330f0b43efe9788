use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use monkey_error::{BuildResult, MonkeyError};

pub struct CssCompiler;

impl CssCompiler {
  pub fn minify(source_text: &str) -> BuildResult<String> {
    let invalid = |reason: String| MonkeyError::InvalidCss { reason };

    let mut stylesheet = StyleSheet::parse(source_text, ParserOptions::default())
      .map_err(|err| invalid(err.to_string()))?;
    stylesheet.minify(MinifyOptions::default()).map_err(|err| invalid(err.to_string()))?;
    let ret = stylesheet
      .to_css(PrinterOptions { minify: true, ..PrinterOptions::default() })
      .map_err(|err| invalid(err.to_string()))?;

    Ok(ret.code)
  }
}

#[test]
fn basic_test() {
  let code = CssCompiler::minify(".a {\n  color: red;\n}\n\n.b { margin: 0px; }\n").unwrap();
  assert!(code.starts_with(".a{color:red}"));
  assert!(!code.contains('\n'));
}
