//! goore Parser Component
//!
//! Turns goore source text into a located abstract syntax tree. The lexer
//! decides which line breaks end a statement, the parser builds statements
//! and expressions and keeps going after per-statement syntax errors.
//!
//! # Overview
//!
//! - [`Lexer`] - Pull-based tokenizer with newline significance
//! - [`Token`] / [`TokenTag`] - Lexical units
//! - [`Parser`] - Recursive descent statements, precedence climbing expressions
//! - [`Program`], [`Statement`], [`Expression`] - Syntax tree
//! - [`dump`] - Indented text rendering of any node
//!
//! # Example
//!
//! ```
//! use parser::{parse_str, Expression, Statement};
//!
//! let program = parse_str("def x = 1 + 2\n", "example.goore").unwrap();
//! assert!(program.errors.is_empty());
//!
//! match &program.statements[0] {
//!     Statement::Def { name, init, .. } => {
//!         assert_eq!(name.name, "x");
//!         assert!(matches!(init, Some(Expression::InfixExpression { .. })));
//!     }
//!     other => panic!("unexpected statement {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod dump;
mod expression;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    AssignOperator, Expression, HashPair, Identifier, InfixOperator, Node, PrefixOperator,
    Program, Statement,
};
pub use dump::{dump, Dump};
pub use expression::Precedence;
pub use lexer::Lexer;
pub use parser::{parse_reader, parse_str, Parser, MAX_NESTING};
pub use token::{Token, TokenTag};
