//! Indented text rendering of syntax trees

use crate::ast::{Expression, HashPair, Identifier, Node, Program, Statement};
use std::fmt;

/// Something the dumper can render
pub trait Dump: Node {
    /// Append the rendering of `self` at the dumper's current depth
    fn dump_into(&self, out: &mut Dumper);
}

/// Accumulates dump output
#[derive(Debug, Default)]
pub struct Dumper {
    out: String,
    level: usize,
}

impl Dumper {
    fn line(&mut self, text: fmt::Arguments<'_>) {
        for _ in 0..self.level {
            self.out.push_str("  ");
        }
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    fn head(&mut self, node: &impl Node, kind: &str, value: Option<&dyn fmt::Display>) {
        match value {
            Some(value) => self.line(format_args!("{}:{}: {}", node.location(), kind, value)),
            None => self.line(format_args!("{}:{}", node.location(), kind)),
        }
    }

    fn child(&mut self, attr: &str, node: &impl Dump) {
        self.line(format_args!("@{}:", attr));
        self.nested(|d| node.dump_into(d));
    }

    fn optional(&mut self, attr: &str, node: Option<&impl Dump>) {
        match node {
            Some(node) => self.child(attr, node),
            None => self.line(format_args!("@{}: nil", attr)),
        }
    }

    fn list<T: Dump>(&mut self, attr: &str, nodes: &[T]) {
        if nodes.is_empty() {
            self.line(format_args!("@{}: []", attr));
            return;
        }
        self.line(format_args!("@{}:", attr));
        self.nested(|d| nodes.iter().for_each(|n| n.dump_into(d)));
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.level += 1;
        f(self);
        self.level -= 1;
    }
}

/// Render `node` as an indented tree.
///
/// Each node is a line `<location>:<Kind>[: <value>]`, followed by one
/// `@Attr:` line per child slot. Attributes sit one level below their node
/// and children one level below their attribute, two spaces per level.
///
/// # Examples
///
/// ```
/// use parser::{dump, parse_str};
///
/// let program = parse_str("1 + 2\n", "calc.goore").unwrap();
/// let text = dump(&program);
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(
///     lines,
///     vec![
///         "(1:1):(1:6):Program: calc.goore",
///         "  @Statements:",
///         "    (1:1):(1:6):ExpressionStatement",
///         "      @Expression:",
///         "        (1:1):(1:5):InfixExpression: +",
///         "          @Left:",
///         "            (1:1):(1:1):IntLiteral: 1",
///         "          @Right:",
///         "            (1:5):(1:5):IntLiteral: 2",
///     ]
/// );
/// ```
pub fn dump(node: &impl Dump) -> String {
    let mut dumper = Dumper::default();
    node.dump_into(&mut dumper);
    dumper.out
}

impl Dump for Program {
    fn dump_into(&self, d: &mut Dumper) {
        d.head(self, "Program", Some(&self.file_name));
        d.nested(|d| d.list("Statements", &self.statements));
    }
}

impl Dump for Identifier {
    fn dump_into(&self, d: &mut Dumper) {
        d.head(self, "Identifier", Some(&self.name));
    }
}

impl Dump for HashPair {
    fn dump_into(&self, d: &mut Dumper) {
        d.head(self, "HashPair", None);
        d.nested(|d| {
            d.child("Key", &self.key);
            d.child("Value", &self.value);
        });
    }
}

impl Dump for Statement {
    fn dump_into(&self, d: &mut Dumper) {
        match self {
            Statement::Def { name, init, .. } => {
                d.head(self, self.kind(), None);
                d.nested(|d| {
                    d.child("Name", name);
                    d.optional("Init", init.as_ref());
                });
            }
            Statement::While {
                condition, body, ..
            } => {
                d.head(self, self.kind(), None);
                d.nested(|d| {
                    d.child("Condition", condition);
                    d.list("Body", body);
                });
            }
            Statement::Break { .. } | Statement::Continue { .. } => {
                d.head(self, self.kind(), None);
            }
            Statement::Return { value, .. } => {
                d.head(self, self.kind(), None);
                d.nested(|d| d.optional("Value", value.as_ref()));
            }
            Statement::ExpressionStatement { expression, .. } => {
                d.head(self, self.kind(), None);
                d.nested(|d| d.child("Expression", expression));
            }
            Statement::InvalidStatement { error, .. } => {
                d.head(self, self.kind(), Some(&error.message));
            }
        }
    }
}

impl Dump for Expression {
    fn dump_into(&self, d: &mut Dumper) {
        let kind = self.kind();
        match self {
            Expression::Identifier(ident) => ident.dump_into(d),
            Expression::NilLiteral { .. } => d.head(self, kind, None),
            Expression::BoolLiteral { value, .. } => d.head(self, kind, Some(value)),
            Expression::IntLiteral { value, .. } => d.head(self, kind, Some(value)),
            Expression::FloatLiteral { value, .. } => {
                d.head(self, kind, Some(&format!("{:?}", value)))
            }
            Expression::StringLiteral { value, .. } => {
                d.head(self, kind, Some(&format!("{:?}", value)))
            }
            Expression::PrefixExpression {
                operator, operand, ..
            } => {
                d.head(self, kind, Some(operator));
                d.nested(|d| d.child("Operand", &**operand));
            }
            Expression::InfixExpression {
                operator,
                left,
                right,
                ..
            } => {
                d.head(self, kind, Some(operator));
                d.nested(|d| {
                    d.child("Left", &**left);
                    d.child("Right", &**right);
                });
            }
            Expression::ArrayLiteral { elements, .. } => {
                d.head(self, kind, None);
                d.nested(|d| d.list("Elements", elements));
            }
            Expression::HashLiteral { pairs, .. } => {
                d.head(self, kind, None);
                d.nested(|d| d.list("Pairs", pairs));
            }
            Expression::FunctionLiteral {
                parameters, body, ..
            } => {
                d.head(self, kind, None);
                d.nested(|d| {
                    d.list("Parameters", parameters);
                    d.list("Body", body);
                });
            }
            Expression::Call {
                callee, arguments, ..
            } => {
                d.head(self, kind, None);
                d.nested(|d| {
                    d.child("Callee", &**callee);
                    d.list("Arguments", arguments);
                });
            }
            Expression::KeyAccess { receiver, key, .. } => {
                d.head(self, kind, None);
                d.nested(|d| {
                    d.child("Receiver", &**receiver);
                    d.child("Key", &**key);
                });
            }
            Expression::Let {
                target,
                operator,
                value,
                ..
            } => {
                d.head(self, kind, Some(operator));
                d.nested(|d| {
                    d.child("Target", target);
                    d.child("Value", &**value);
                });
            }
            Expression::KeyAssign {
                receiver,
                key,
                operator,
                value,
                ..
            } => {
                d.head(self, kind, Some(operator));
                d.nested(|d| {
                    d.child("Receiver", &**receiver);
                    d.child("Key", &**key);
                    d.child("Value", &**value);
                });
            }
            Expression::If {
                condition,
                body,
                alternative,
                ..
            } => {
                d.head(self, kind, None);
                d.nested(|d| {
                    d.child("Condition", &**condition);
                    d.list("Body", body);
                    d.optional("Alternative", alternative.as_deref());
                });
            }
            Expression::Else { body, .. } => {
                d.head(self, kind, None);
                d.nested(|d| d.list("Body", body));
            }
        }
    }
}
