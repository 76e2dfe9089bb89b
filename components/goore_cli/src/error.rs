//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source file could not be opened
    #[error("could not read '{path}': {source}")]
    Read {
        /// Path as given on the command line
        path: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Lexing or parsing aborted
    #[error(transparent)]
    Parse(#[from] core_types::Error),

    /// Writing to the output failed
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),

    /// Tree could not be encoded as JSON
    #[error("could not encode tree as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither a file nor inline code was given
    #[error("no input: pass a FILE or --eval CODE")]
    NoInput,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
