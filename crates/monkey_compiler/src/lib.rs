mod css_compiler;
mod ecma_compiler;

pub use crate::{css_compiler::CssCompiler, ecma_compiler::EcmaCompiler};
