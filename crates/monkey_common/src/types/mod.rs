pub mod output;
pub mod package_info;
pub mod resource_context;
pub mod virtual_module_id;
