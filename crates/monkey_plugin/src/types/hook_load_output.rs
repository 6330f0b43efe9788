#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookLoadOutput {
  pub code: String,
}
