mod build_session;
mod external_resource;
mod options;
mod types;
mod userscript;

pub use crate::{
  build_session::{BuildSession, SharedBuildSession},
  external_resource::{
    external_resource_config::ExternalResourceConfig,
    loader_source::LoaderSource,
    resource_fn::{NodeLoaderFn, ResourceFn},
    resource_template::ResourceTemplate,
    ExternalResource,
  },
  options::{
    build_options::BuildOptions, header_format::HeaderFormat, meta_file_name::MetaFileName,
    normalized_monkey_options::NormalizedMonkeyOptions, MonkeyOptions,
  },
  types::{
    output::{Output, OutputAsset, OutputBundle, OutputChunk},
    package_info::{PackageInfo, PackageInfoResolver, SharedPackageInfoResolver},
    resource_context::{LoaderContext, NodeLoaderContext, ResourceContext},
    virtual_module_id::VirtualModuleId,
  },
  userscript::{grant_policy::GrantPolicy, userscript_meta::UserscriptMeta},
};
