//! goore CLI Library
//!
//! Argument parsing, the [`Runner`] that drives the parser, and the CLI
//! error type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, CliResult};
pub use runner::{Report, Runner};
