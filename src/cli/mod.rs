//! Command-line interface module.

mod args;
pub mod assets;
pub mod resolve;
pub mod variants;

pub use args::{Cli, Commands, ResolveArgs, VariantArgs};
