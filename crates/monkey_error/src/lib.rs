mod build_error;
mod monkey_error;

pub use crate::{
  build_error::{BuildError, BuildResult},
  monkey_error::{MonkeyError, ResourceField},
};
