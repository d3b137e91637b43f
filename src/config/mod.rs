pub mod cli;

#[cfg(feature = "cli")]
mod args;

#[cfg(feature = "cli")]
pub use args::{normalize_args, CliConfig};
