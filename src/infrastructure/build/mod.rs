//! Site generator invocation

mod generator;

pub use generator::{GeneratorBuilder, MINIFY_FLAG};
