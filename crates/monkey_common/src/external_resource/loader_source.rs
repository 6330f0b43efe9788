/// Caller-authored JS that turns the loader context into the module's default export at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderSource {
  /// A JS function expression such as `(ctx) => ctx.resourceUrl` or
  /// `async function load(ctx) { ... }`, applied to the context object.
  Function(String),
  /// A JS expression where `[resourceUrl]`, `[resourceName]`, `[importName]`, `[name]`,
  /// `[version]` and `[resolveName]` are replaced by JSON string literals.
  Template(String),
}

impl LoaderSource {
  pub fn function(source: impl Into<String>) -> Self {
    Self::Function(source.into())
  }

  pub fn template(source: impl Into<String>) -> Self {
    Self::Template(source.into())
  }
}
