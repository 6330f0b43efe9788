mod concat_string;
pub mod indexmap;
pub mod mime;
pub mod sanitize_file_name;
pub mod specifier;
