use monkey_error::{BuildResult, MonkeyError};
use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  parser::Parser,
  span::SourceType,
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source_text` as an ES module and prints it back without insignificant
  /// whitespace. `id` is only used to label the error.
  pub fn minify(id: &str, source_text: &str) -> BuildResult<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, SourceType::mjs()).parse();

    if ret.panicked || !ret.errors.is_empty() {
      let reason = ret.errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
      return Err(MonkeyError::InvalidGeneratedCode { id: id.to_string(), reason }.into());
    }

    let mut code = Codegen::new()
      .with_options(CodegenOptions { minify: true, ..CodegenOptions::default() })
      .build(&ret.program)
      .code;
    // callers join outputs with blank lines
    code.truncate(code.trim_end().len());

    Ok(code)
  }
}

#[test]
fn basic_test() {
  let code = EcmaCompiler::minify("test.js", "const a = 1;\n\nexport default a;\n").unwrap();
  assert_eq!(code.trim_end().lines().count(), 1);
  assert!(code.contains("const a=1"));
  assert!(code.contains("export default a"));
}

#[test]
fn invalid_code() {
  let err = EcmaCompiler::minify("broken.js", "export default (").unwrap_err();
  assert!(err.contains(|e| matches!(e, MonkeyError::InvalidGeneratedCode { id, .. } if id == "broken.js")));
}
