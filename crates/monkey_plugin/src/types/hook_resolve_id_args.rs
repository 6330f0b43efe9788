#[derive(Debug, Clone, Copy)]
pub struct HookResolveIdArgs<'a> {
  pub specifier: &'a str,
}
