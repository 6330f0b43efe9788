#[derive(Debug, Clone, Copy)]
pub struct HookLoadArgs<'a> {
  pub id: &'a str,
}
