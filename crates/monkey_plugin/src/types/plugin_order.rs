/// Where a plugin runs relative to plugins without an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluginOrder {
  Pre,
  Post,
}
