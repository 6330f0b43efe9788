mod node_modules_resolver;

pub use node_modules_resolver::NodeModulesResolver;
