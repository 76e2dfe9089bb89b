//! Source spans attached to tokens and syntax tree nodes.

use serde::Serialize;
use std::fmt;

/// A single point in the source text.
///
/// Lines and columns are both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number
    pub line: u32,
    /// Column number, counted in Unicode scalar values
    pub column: u32,
}

impl Position {
    /// Create a position from a line and a column
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}

/// A span in the source text, from `start` through `end` inclusive.
///
/// Every token and every syntax tree node carries one. Spans of compound
/// nodes are built with [`Location::merge`] from the spans of their parts and
/// are never modified afterwards.
///
/// # Examples
///
/// ```
/// use core_types::Location;
///
/// let a = Location::new(1, 1, 1, 3);
/// let b = Location::new(2, 5, 2, 9);
///
/// let whole = Location::merge(a, b);
/// assert_eq!(whole, Location::new(1, 1, 2, 9));
/// assert_eq!(whole.to_string(), "(1:1):(2:9)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    /// First character of the span
    pub start: Position,
    /// Last character of the span
    pub end: Position,
}

impl Location {
    /// Create a location from its four coordinates
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(start_line, start_column),
            end: Position::new(end_line, end_column),
        }
    }

    /// A zero-width location covering the single position `at`
    pub const fn at(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Span starting where `first` starts and ending where `last` ends
    pub const fn merge(first: Location, last: Location) -> Location {
        Location {
            start: first.start,
            end: last.end,
        }
    }

    /// Same span with a different end point
    pub const fn extended_to(self, end: Position) -> Location {
        Location {
            start: self.start,
            end,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
