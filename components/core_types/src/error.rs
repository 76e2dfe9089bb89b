//! Error types shared by the lexer and the parser.
//!
//! Errors come in two tiers. A [`SyntaxError`] whose [`ErrorKind`] is
//! recoverable is collected by the parser and parsing carries on with the
//! next statement. Everything else is wrapped in [`Error`] and ends the parse.

use crate::Location;
use serde::Serialize;
use std::fmt;

/// The kind of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A token that does not fit the grammar at this point
    UnexpectedToken,
    /// Two elements of a comma-delimited list without a comma between them
    MissingComma,
    /// Left-hand side of an assignment is not assignable
    InvalidAssignment,
    /// A numeric literal that does not fit its type
    InvalidLiteral,
    /// Expressions or blocks nested deeper than the parser allows
    NestingTooDeep,
    /// Input ended inside a string literal
    UnterminatedString,
    /// A character that cannot start any token
    InvalidCharacter,
}

impl ErrorKind {
    /// Whether the parser can skip the offending statement and continue.
    ///
    /// Lexical errors are never recoverable: after one of them there is no
    /// reliable token boundary to resume from.
    pub fn is_recoverable(self) -> bool {
        match self {
            ErrorKind::UnexpectedToken
            | ErrorKind::MissingComma
            | ErrorKind::InvalidAssignment
            | ErrorKind::InvalidLiteral
            | ErrorKind::NestingTooDeep => true,
            ErrorKind::UnterminatedString | ErrorKind::InvalidCharacter => false,
        }
    }
}

/// A syntax error located in the source.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, Location, SyntaxError};
///
/// let error = SyntaxError::new(
///     ErrorKind::UnterminatedString,
///     Location::new(1, 1, 1, 1),
///     "unterminated string literal",
/// );
/// assert_eq!(error.to_string(), "(1:1):(1:1): unterminated string literal");
///
/// let error = error.in_file("main.goore");
/// assert_eq!(
///     error.to_string(),
///     "main.goore:(1:1):(1:1): unterminated string literal"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Name of the source file, empty until the parser attaches it
    pub file_name: String,
    /// Span of the offending token
    pub location: Location,
    /// Human-readable description
    pub message: String,
}

impl SyntaxError {
    /// Create an error that is not yet attributed to a file
    pub fn new(kind: ErrorKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            kind,
            file_name: String::new(),
            location,
            message: message.into(),
        }
    }

    /// Attribute the error to `file_name`
    pub fn in_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file_name.is_empty() {
            write!(f, "{}:", self.file_name)?;
        }
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// An error that aborts lexing or parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The source is malformed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// The syntax error inside, if this is one
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Io(_) => None,
        }
    }
}

/// Result type for lexing and parsing operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(ErrorKind::UnexpectedToken.is_recoverable());
        assert!(ErrorKind::MissingComma.is_recoverable());
        assert!(ErrorKind::InvalidAssignment.is_recoverable());
        assert!(ErrorKind::InvalidLiteral.is_recoverable());
        assert!(ErrorKind::NestingTooDeep.is_recoverable());
        assert!(!ErrorKind::UnterminatedString.is_recoverable());
        assert!(!ErrorKind::InvalidCharacter.is_recoverable());
    }

    #[test]
    fn test_syntax_error_display_without_file() {
        let err = SyntaxError::new(
            ErrorKind::InvalidCharacter,
            Location::new(2, 3, 2, 3),
            "invalid character - '$'",
        );
        assert_eq!(err.to_string(), "(2:3):(2:3): invalid character - '$'");
    }

    #[test]
    fn test_error_wraps_syntax_error_transparently() {
        let syntax = SyntaxError::new(ErrorKind::UnexpectedToken, Location::default(), "boom")
            .in_file("a.goore");
        let err = Error::from(syntax.clone());
        assert_eq!(err.to_string(), syntax.to_string());
        assert_eq!(err.as_syntax(), Some(&syntax));
    }

    #[test]
    fn test_io_error_has_no_syntax_error() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(err.as_syntax().is_none());
        assert_eq!(err.to_string(), "disk");
    }
}
