use std::{fmt::Debug, future::Future, sync::Arc};

use futures::{future::BoxFuture, FutureExt};

use crate::{NodeLoaderContext, ResourceContext, ResourceTemplate};

type DynResourceFn =
  dyn Fn(ResourceContext) -> BoxFuture<'static, anyhow::Result<String>> + Send + Sync;

/// Computes either the resource name or the resource url of an external resource.
#[derive(Clone)]
pub struct ResourceFn(Arc<DynResourceFn>);

impl ResourceFn {
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: Fn(ResourceContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
  {
    Self(Arc::new(move |ctx| f(ctx).boxed()))
  }

  pub fn from_fn<F>(f: F) -> Self
  where
    F: Fn(&ResourceContext) -> String + Send + Sync + 'static,
  {
    Self::new(move |ctx| {
      let value = f(&ctx);
      async move { Ok(value) }
    })
  }

  pub fn template(template: impl Into<ResourceTemplate>) -> Self {
    let template = template.into();
    Self::from_fn(move |ctx| template.render(ctx))
  }

  pub async fn call(&self, ctx: ResourceContext) -> anyhow::Result<String> {
    (self.0)(ctx).await
  }
}

impl Debug for ResourceFn {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("ResourceFn")
  }
}

type DynNodeLoaderFn =
  dyn Fn(NodeLoaderContext) -> BoxFuture<'static, anyhow::Result<String>> + Send + Sync;

/// Produces the module source of an external resource during the build.
#[derive(Clone)]
pub struct NodeLoaderFn(Arc<DynNodeLoaderFn>);

impl NodeLoaderFn {
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: Fn(NodeLoaderContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
  {
    Self(Arc::new(move |ctx| f(ctx).boxed()))
  }

  pub fn from_fn<F>(f: F) -> Self
  where
    F: Fn(&NodeLoaderContext) -> String + Send + Sync + 'static,
  {
    Self::new(move |ctx| {
      let value = f(&ctx);
      async move { Ok(value) }
    })
  }

  pub async fn call(&self, ctx: NodeLoaderContext) -> anyhow::Result<String> {
    (self.0)(ctx).await
  }
}

impl Debug for NodeLoaderFn {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("NodeLoaderFn")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_resource_fn() {
    use crate::PackageInfo;

    let ctx = ResourceContext {
      package: PackageInfo {
        name: "vue".to_string(),
        version: "3.3.0".to_string(),
        resolve_name: String::new(),
      },
      import_name: "vue".to_string(),
    };

    let sync_fn = ResourceFn::from_fn(|ctx| format!("{}-{}", ctx.package.name, ctx.package.version));
    assert_eq!(sync_fn.call(ctx.clone()).await.unwrap(), "vue-3.3.0");

    let async_fn = ResourceFn::new(|ctx: ResourceContext| async move {
      tokio::task::yield_now().await;
      Ok::<_, anyhow::Error>(ctx.import_name.to_uppercase())
    });
    assert_eq!(async_fn.call(ctx.clone()).await.unwrap(), "VUE");

    let failing = ResourceFn::new(|_| async { Err::<String, _>(anyhow::anyhow!("offline")) });
    assert_eq!(failing.call(ctx).await.unwrap_err().to_string(), "offline");
  }
}
