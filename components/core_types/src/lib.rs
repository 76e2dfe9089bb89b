//! Core types shared by the goore front end.
//!
//! This crate provides the foundational types used by the lexer and the
//! parser: source spans, the two tiers of errors, and the one-item lookahead
//! buffer.
//!
//! # Overview
//!
//! - [`Location`] - Span of a token or syntax tree node
//! - [`Position`] - A single line/column point
//! - [`SyntaxError`] - A located syntax error
//! - [`ErrorKind`] - Types of syntax errors
//! - [`Error`] - Errors that abort a parse
//! - [`Pushback`] - Single-slot lookahead buffer
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Location, SyntaxError};
//!
//! let error = SyntaxError::new(
//!     ErrorKind::MissingComma,
//!     Location::new(1, 3, 1, 3),
//!     "missing comma",
//! );
//! assert!(error.kind.is_recoverable());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod location;
mod pushback;

pub use error::{Error, ErrorKind, Result, SyntaxError};
pub use location::{Location, Position};
pub use pushback::Pushback;
