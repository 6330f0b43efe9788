pub mod cdn;
pub mod normalize_options;
pub mod render_userscript_header;
