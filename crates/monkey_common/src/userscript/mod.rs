pub mod grant_policy;
pub mod userscript_meta;
