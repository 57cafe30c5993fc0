// optipngp - optipng wrapper that preserves modification times
// Runs the optimizer on one file, then puts the file's mtime back

pub mod cli;
pub mod error;
pub mod models;
pub mod runner;
pub mod timestamp;
pub mod utils;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::WrapperError;
pub use models::{Invocation, Outcome, WrapperConfig};
pub use runner::OptimizerRunner;
