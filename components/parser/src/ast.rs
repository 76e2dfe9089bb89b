//! Abstract Syntax Tree node definitions

use core_types::{Location, SyntaxError};
use serde::Serialize;
use std::fmt;

/// Anything in the tree that knows its own span
pub trait Node {
    /// Source span of the node
    fn location(&self) -> Location;
}

/// Root of a parsed source unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// Name the source was parsed under
    pub file_name: String,
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
    /// Recovered syntax errors in order of occurrence
    pub errors: Vec<SyntaxError>,
    /// First statement through last statement
    pub location: Location,
}

impl Program {
    /// Whether any syntax error was recorded
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Node for Program {
    fn location(&self) -> Location {
        self.location
    }
}

/// A bare name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    /// The name itself
    pub name: String,
    /// Source location
    pub location: Location,
}

impl Node for Identifier {
    fn location(&self) -> Location {
        self.location
    }
}

/// goore statements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// Variable definition (`def x = 1`)
    Def {
        /// Defined name
        name: Identifier,
        /// Initial value
        init: Option<Expression>,
        /// Source location
        location: Location,
    },

    /// While loop
    While {
        /// Loop condition
        condition: Expression,
        /// Loop body
        body: Vec<Statement>,
        /// Source location
        location: Location,
    },

    /// `break`
    Break {
        /// Source location
        location: Location,
    },

    /// `continue`
    Continue {
        /// Source location
        location: Location,
    },

    /// `return` with an optional value
    Return {
        /// Returned value
        value: Option<Expression>,
        /// Source location
        location: Location,
    },

    /// Expression evaluated for its effect
    ExpressionStatement {
        /// The expression
        expression: Expression,
        /// Source location
        location: Location,
    },

    /// Placeholder for a statement that failed to parse
    InvalidStatement {
        /// Why it failed
        error: SyntaxError,
        /// First token through the token recovery stopped at
        location: Location,
    },
}

impl Statement {
    /// Name of the variant, as shown in dumps
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Def { .. } => "Def",
            Statement::While { .. } => "While",
            Statement::Break { .. } => "Break",
            Statement::Continue { .. } => "Continue",
            Statement::Return { .. } => "Return",
            Statement::ExpressionStatement { .. } => "ExpressionStatement",
            Statement::InvalidStatement { .. } => "InvalidStatement",
        }
    }
}

impl Node for Statement {
    fn location(&self) -> Location {
        match self {
            Statement::Def { location, .. }
            | Statement::While { location, .. }
            | Statement::Break { location }
            | Statement::Continue { location }
            | Statement::Return { location, .. }
            | Statement::ExpressionStatement { location, .. }
            | Statement::InvalidStatement { location, .. } => *location,
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
    /// `!x`
    Not,
}

impl PrefixOperator {
    /// Source spelling
    pub fn lexeme(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Not => "!",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfixOperator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl InfixOperator {
    /// Source spelling
    pub fn lexeme(self) -> &'static str {
        match self {
            InfixOperator::Eq => "==",
            InfixOperator::Ne => "!=",
            InfixOperator::Lt => "<",
            InfixOperator::Le => "<=",
            InfixOperator::Gt => ">",
            InfixOperator::Ge => ">=",
            InfixOperator::Add => "+",
            InfixOperator::Sub => "-",
            InfixOperator::Mul => "*",
            InfixOperator::Div => "/",
            InfixOperator::Mod => "%",
        }
    }
}

/// Plain and compound assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
    /// `%=`
    Mod,
}

impl AssignOperator {
    /// Source spelling
    pub fn lexeme(self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Add => "+=",
            AssignOperator::Sub => "-=",
            AssignOperator::Mul => "*=",
            AssignOperator::Div => "/=",
            AssignOperator::Mod => "%=",
        }
    }
}

macro_rules! display_lexeme {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.lexeme())
            }
        })*
    };
}

display_lexeme!(PrefixOperator, InfixOperator, AssignOperator);

/// One `key: value` entry of a hash literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashPair {
    /// Key expression
    pub key: Expression,
    /// Value expression
    pub value: Expression,
}

impl Node for HashPair {
    fn location(&self) -> Location {
        Location::merge(self.key.location(), self.value.location())
    }
}

/// goore expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// Variable reference
    Identifier(Identifier),

    /// `nil`
    NilLiteral {
        /// Source location
        location: Location,
    },

    /// `true` or `false`
    BoolLiteral {
        /// Literal value
        value: bool,
        /// Source location
        location: Location,
    },

    /// Integer literal
    IntLiteral {
        /// Literal value
        value: i64,
        /// Source location
        location: Location,
    },

    /// Float literal
    FloatLiteral {
        /// Literal value
        value: f64,
        /// Source location
        location: Location,
    },

    /// String literal
    StringLiteral {
        /// Unescaped contents
        value: String,
        /// Source location
        location: Location,
    },

    /// Unary operation
    PrefixExpression {
        /// Operator
        operator: PrefixOperator,
        /// Operand
        operand: Box<Expression>,
        /// Source location
        location: Location,
    },

    /// Binary operation
    InfixExpression {
        /// Operator
        operator: InfixOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
        /// Source location
        location: Location,
    },

    /// `[a, b, c]`
    ArrayLiteral {
        /// Elements in source order
        elements: Vec<Expression>,
        /// Source location
        location: Location,
    },

    /// `{k: v, ...}`; duplicate keys are kept as written
    HashLiteral {
        /// Pairs in source order
        pairs: Vec<HashPair>,
        /// Source location
        location: Location,
    },

    /// `-> (a, b) { ... }`
    FunctionLiteral {
        /// Parameter names
        parameters: Vec<Identifier>,
        /// Function body
        body: Vec<Statement>,
        /// Source location
        location: Location,
    },

    /// `f(a, b)`
    Call {
        /// Called expression
        callee: Box<Expression>,
        /// Arguments
        arguments: Vec<Expression>,
        /// Source location
        location: Location,
    },

    /// `a[k]`
    KeyAccess {
        /// Indexed expression
        receiver: Box<Expression>,
        /// Key expression
        key: Box<Expression>,
        /// Source location
        location: Location,
    },

    /// Assignment to a name
    Let {
        /// Assigned name
        target: Identifier,
        /// `=` or a compound operator
        operator: AssignOperator,
        /// Assigned value
        value: Box<Expression>,
        /// Source location
        location: Location,
    },

    /// Assignment through an index
    KeyAssign {
        /// Indexed expression
        receiver: Box<Expression>,
        /// Key expression
        key: Box<Expression>,
        /// `=` or a compound operator
        operator: AssignOperator,
        /// Assigned value
        value: Box<Expression>,
        /// Source location
        location: Location,
    },

    /// `if`/`elsif` link of a conditional chain
    If {
        /// Condition
        condition: Box<Expression>,
        /// Taken branch
        body: Vec<Statement>,
        /// Next `If` (for `elsif`), an `Else`, or nothing
        alternative: Option<Box<Expression>>,
        /// Source location
        location: Location,
    },

    /// Final `else` of a conditional chain
    Else {
        /// Branch body
        body: Vec<Statement>,
        /// Source location
        location: Location,
    },
}

impl Expression {
    /// Name of the variant, as shown in dumps
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::NilLiteral { .. } => "NilLiteral",
            Expression::BoolLiteral { .. } => "BoolLiteral",
            Expression::IntLiteral { .. } => "IntLiteral",
            Expression::FloatLiteral { .. } => "FloatLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::PrefixExpression { .. } => "PrefixExpression",
            Expression::InfixExpression { .. } => "InfixExpression",
            Expression::ArrayLiteral { .. } => "ArrayLiteral",
            Expression::HashLiteral { .. } => "HashLiteral",
            Expression::FunctionLiteral { .. } => "FunctionLiteral",
            Expression::Call { .. } => "Call",
            Expression::KeyAccess { .. } => "KeyAccess",
            Expression::Let { .. } => "Let",
            Expression::KeyAssign { .. } => "KeyAssign",
            Expression::If { .. } => "If",
            Expression::Else { .. } => "Else",
        }
    }
}

impl Node for Expression {
    fn location(&self) -> Location {
        match self {
            Expression::Identifier(ident) => ident.location,
            Expression::NilLiteral { location }
            | Expression::BoolLiteral { location, .. }
            | Expression::IntLiteral { location, .. }
            | Expression::FloatLiteral { location, .. }
            | Expression::StringLiteral { location, .. }
            | Expression::PrefixExpression { location, .. }
            | Expression::InfixExpression { location, .. }
            | Expression::ArrayLiteral { location, .. }
            | Expression::HashLiteral { location, .. }
            | Expression::FunctionLiteral { location, .. }
            | Expression::Call { location, .. }
            | Expression::KeyAccess { location, .. }
            | Expression::Let { location, .. }
            | Expression::KeyAssign { location, .. }
            | Expression::If { location, .. }
            | Expression::Else { location, .. } => *location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64, column: u32) -> Expression {
        Expression::IntLiteral {
            value,
            location: Location::new(1, column, 1, column),
        }
    }

    #[test]
    fn test_expression_location() {
        let sum = Expression::InfixExpression {
            operator: InfixOperator::Add,
            left: Box::new(int(1, 1)),
            right: Box::new(int(2, 5)),
            location: Location::new(1, 1, 1, 5),
        };
        assert_eq!(sum.location(), Location::new(1, 1, 1, 5));
        assert_eq!(sum.kind(), "InfixExpression");
    }

    #[test]
    fn test_statement_location() {
        let stmt = Statement::Break {
            location: Location::new(3, 1, 3, 6),
        };
        assert_eq!(stmt.location(), Location::new(3, 1, 3, 6));
        assert_eq!(stmt.kind(), "Break");
    }

    #[test]
    fn test_hash_pair_location_spans_key_and_value() {
        let pair = HashPair {
            key: int(1, 2),
            value: int(2, 5),
        };
        assert_eq!(pair.location(), Location::new(1, 2, 1, 5));
    }

    #[test]
    fn test_operator_lexemes() {
        assert_eq!(PrefixOperator::Not.to_string(), "!");
        assert_eq!(InfixOperator::Le.to_string(), "<=");
        assert_eq!(AssignOperator::Mod.to_string(), "%=");
    }
}
