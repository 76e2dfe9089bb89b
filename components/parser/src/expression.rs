//! Expression parsing: precedence climbing and the comma-list helper

use crate::ast::{
    AssignOperator, Expression, HashPair, Identifier, InfixOperator, Node, PrefixOperator,
};
use crate::parser::Parser;
use crate::token::{Token, TokenTag};
use core_types::{ErrorKind, Location, Result, SyntaxError};
use std::io::BufRead;

/// Binding strength of an operator, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Start of a full expression
    Lowest,
    /// `==` `!=`
    Equality,
    /// `<` `<=` `>` `>=`
    Compare,
    /// `+` `-`
    Additive,
    /// `*` `/` `%`
    Multiplicative,
    /// Unary `+` `-` `!`
    Prefix,
    /// `f(...)` and `a[...]`
    Call,
    /// Assignment operators
    Highest,
}

impl Precedence {
    /// Precedence of `tag` in infix position, if it is an infix operator
    pub fn of_infix(tag: TokenTag) -> Option<Precedence> {
        let precedence = match tag {
            TokenTag::Eq | TokenTag::Ne => Precedence::Equality,
            TokenTag::Lt | TokenTag::Le | TokenTag::Gt | TokenTag::Ge => Precedence::Compare,
            TokenTag::Add | TokenTag::Sub => Precedence::Additive,
            TokenTag::Mul | TokenTag::Div | TokenTag::Mod => Precedence::Multiplicative,
            TokenTag::LeftParen | TokenTag::LeftBracket => Precedence::Call,
            tag if tag.is_assignment() => Precedence::Highest,
            _ => return None,
        };
        Some(precedence)
    }
}

fn infix_operator(tag: TokenTag) -> Option<InfixOperator> {
    Some(match tag {
        TokenTag::Eq => InfixOperator::Eq,
        TokenTag::Ne => InfixOperator::Ne,
        TokenTag::Lt => InfixOperator::Lt,
        TokenTag::Le => InfixOperator::Le,
        TokenTag::Gt => InfixOperator::Gt,
        TokenTag::Ge => InfixOperator::Ge,
        TokenTag::Add => InfixOperator::Add,
        TokenTag::Sub => InfixOperator::Sub,
        TokenTag::Mul => InfixOperator::Mul,
        TokenTag::Div => InfixOperator::Div,
        TokenTag::Mod => InfixOperator::Mod,
        _ => return None,
    })
}

fn assign_operator(tag: TokenTag) -> Option<AssignOperator> {
    Some(match tag {
        TokenTag::Let => AssignOperator::Assign,
        TokenTag::LetAdd => AssignOperator::Add,
        TokenTag::LetSub => AssignOperator::Sub,
        TokenTag::LetMul => AssignOperator::Mul,
        TokenTag::LetDiv => AssignOperator::Div,
        TokenTag::LetMod => AssignOperator::Mod,
        _ => return None,
    })
}

impl<R: BufRead> Parser<R> {
    /// Parse a complete expression
    pub(crate) fn parse_expression_lowest(&mut self) -> Result<Expression> {
        self.parse_expression(Precedence::Lowest)
    }

    /// Parse an expression whose operators all bind tighter than `min`
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Result<Expression> {
        self.descend(|p| p.parse_expression_within(min))
    }

    fn parse_expression_within(&mut self, min: Precedence) -> Result<Expression> {
        let token = self.next_token()?;
        let mut left = self.parse_prefix(token)?;

        loop {
            let tag = self.peek_tag()?;
            let precedence = match Precedence::of_infix(tag) {
                Some(precedence) if precedence > min => precedence,
                _ => return Ok(left),
            };
            let operator = self.next_token()?;
            left = self.parse_infix(left, operator, precedence)?;
        }
    }

    fn parse_prefix(&mut self, token: Token) -> Result<Expression> {
        let location = token.location;
        match token.tag {
            TokenTag::Identifier => Ok(Expression::Identifier(Identifier {
                name: token.value,
                location,
            })),
            TokenTag::IntLiteral => match token.value.parse::<i64>() {
                Ok(value) => Ok(Expression::IntLiteral { value, location }),
                Err(_) => Err(self.syntax_error(
                    ErrorKind::InvalidLiteral,
                    location,
                    format!("integer literal out of range - {:?}", token.value),
                )),
            },
            TokenTag::FloatLiteral => match token.value.parse::<f64>() {
                Ok(value) => Ok(Expression::FloatLiteral { value, location }),
                Err(_) => Err(self.syntax_error(
                    ErrorKind::InvalidLiteral,
                    location,
                    format!("invalid float literal - {:?}", token.value),
                )),
            },
            TokenTag::StringLiteral => Ok(Expression::StringLiteral {
                value: token.value,
                location,
            }),
            TokenTag::True | TokenTag::False => Ok(Expression::BoolLiteral {
                value: token.tag == TokenTag::True,
                location,
            }),
            TokenTag::Nil => Ok(Expression::NilLiteral { location }),
            TokenTag::Add | TokenTag::Sub | TokenTag::Bang => {
                let operator = match token.tag {
                    TokenTag::Add => PrefixOperator::Plus,
                    TokenTag::Sub => PrefixOperator::Minus,
                    _ => PrefixOperator::Not,
                };
                let operand = self.parse_expression(Precedence::Prefix)?;
                Ok(Expression::PrefixExpression {
                    operator,
                    location: Location::merge(location, operand.location()),
                    operand: Box::new(operand),
                })
            }
            TokenTag::LeftParen => {
                let inner = self.parse_expression_lowest()?;
                let hint = "expect right paren to close grouping";
                self.expect_closer(TokenTag::RightParen, hint)?;
                Ok(inner)
            }
            TokenTag::LeftBracket => {
                let (elements, close) =
                    self.parse_comma_list(TokenTag::RightBracket, Self::parse_expression_lowest)?;
                Ok(Expression::ArrayLiteral {
                    elements,
                    location: Location::merge(location, close.location),
                })
            }
            TokenTag::LeftBrace => {
                let (pairs, close) =
                    self.parse_comma_list(TokenTag::RightBrace, Self::parse_hash_pair)?;
                Ok(Expression::HashLiteral {
                    pairs,
                    location: Location::merge(location, close.location),
                })
            }
            TokenTag::Arrow => self.parse_function(location),
            TokenTag::If => self.parse_if(location),
            _ => Err(self.unexpected(token, "for beginning of expression")),
        }
    }

    fn parse_infix(
        &mut self,
        left: Expression,
        operator: Token,
        precedence: Precedence,
    ) -> Result<Expression> {
        if let Some(op) = infix_operator(operator.tag) {
            let right = self.parse_expression(precedence)?;
            return Ok(Expression::InfixExpression {
                operator: op,
                location: Location::merge(left.location(), right.location()),
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        if let Some(op) = assign_operator(operator.tag) {
            return self.parse_assignment(left, op);
        }

        match operator.tag {
            TokenTag::LeftParen => {
                let (arguments, close) =
                    self.parse_comma_list(TokenTag::RightParen, Self::parse_expression_lowest)?;
                Ok(Expression::Call {
                    location: Location::merge(left.location(), close.location),
                    callee: Box::new(left),
                    arguments,
                })
            }
            TokenTag::LeftBracket => {
                let key = self.parse_expression_lowest()?;
                let hint = "expect right bracket to close key";
                let close = self.expect_closer(TokenTag::RightBracket, hint)?;
                Ok(Expression::KeyAccess {
                    location: Location::merge(left.location(), close.location),
                    receiver: Box::new(left),
                    key: Box::new(key),
                })
            }
            _ => Err(self.unexpected(operator, "as infix operator")),
        }
    }

    /// `closer`, optionally preceded by one line break
    fn expect_closer(&mut self, closer: TokenTag, hint: &str) -> Result<Token> {
        let mut token = self.next_token()?;
        if token.tag == TokenTag::Newline {
            token = self.next_token()?;
        }
        if token.tag != closer {
            return Err(self.unexpected(token, hint));
        }
        Ok(token)
    }

    fn parse_assignment(
        &mut self,
        target: Expression,
        operator: AssignOperator,
    ) -> Result<Expression> {
        match target {
            Expression::Identifier(target) => {
                let value = self.parse_expression_lowest()?;
                Ok(Expression::Let {
                    location: Location::merge(target.location, value.location()),
                    target,
                    operator,
                    value: Box::new(value),
                })
            }
            Expression::KeyAccess {
                receiver,
                key,
                location,
            } => {
                let value = self.parse_expression_lowest()?;
                Ok(Expression::KeyAssign {
                    location: Location::merge(location, value.location()),
                    receiver,
                    key,
                    operator,
                    value: Box::new(value),
                })
            }
            other => Err(self.syntax_error(
                ErrorKind::InvalidAssignment,
                other.location(),
                format!("cannot assign to {}", other.kind()),
            )),
        }
    }

    fn parse_hash_pair(&mut self) -> Result<HashPair> {
        let key = self.parse_expression_lowest()?;
        self.expect(TokenTag::Colon, "expect colon between hash key and value")?;
        let value = self.parse_expression_lowest()?;
        Ok(HashPair { key, value })
    }

    fn parse_function(&mut self, start: Location) -> Result<Expression> {
        let parameters = if self.peek_tag()? == TokenTag::LeftParen {
            self.next_token()?;
            let (parameters, _) =
                self.parse_comma_list(TokenTag::RightParen, Self::parse_identifier)?;
            parameters
        } else {
            Vec::new()
        };

        let (body, close) = self.parse_block()?;
        Ok(Expression::FunctionLiteral {
            parameters,
            body,
            location: Location::merge(start, close.location),
        })
    }

    /// `if` or `elsif` link; `start` is the keyword's location
    fn parse_if(&mut self, start: Location) -> Result<Expression> {
        let condition = self.parse_expression_lowest()?;
        let (body, close) = self.parse_block()?;

        let token = self.next_token()?;
        let alternative = match token.tag {
            TokenTag::Elsif => Some(self.parse_if(token.location)?),
            TokenTag::Else => {
                let (body, close) = self.parse_block()?;
                Some(Expression::Else {
                    body,
                    location: Location::merge(token.location, close.location),
                })
            }
            _ => {
                self.push_back(token);
                None
            }
        };

        let end = alternative
            .as_ref()
            .map_or(close.location, |alt| alt.location());
        Ok(Expression::If {
            condition: Box::new(condition),
            body,
            alternative: alternative.map(Box::new),
            location: Location::merge(start, end),
        })
    }

    /// Elements separated by commas up to `terminator`.
    ///
    /// A trailing comma, or a line break right before the terminator, is
    /// accepted. A missing comma is recorded and the next element is parsed
    /// anyway.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        terminator: TokenTag,
        mut element: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Token)> {
        let mut items = Vec::new();

        let first = self.next_token()?;
        if first.tag == terminator {
            return Ok((items, first));
        }
        self.push_back(first);

        loop {
            items.push(element(self)?);

            let token = self.next_token()?;
            match token.tag {
                tag if tag == terminator => return Ok((items, token)),
                TokenTag::Comma | TokenTag::Newline => {
                    let next = self.next_token()?;
                    if next.tag == terminator {
                        return Ok((items, next));
                    }
                    if token.tag == TokenTag::Newline {
                        self.missing_comma(&next);
                    }
                    self.push_back(next);
                }
                _ => {
                    self.missing_comma(&token);
                    self.push_back(token);
                }
            }
        }
    }

    fn missing_comma(&mut self, before: &Token) {
        let error = SyntaxError::new(
            ErrorKind::MissingComma,
            before.location,
            format!("missing comma before {:?}({})", before.value, before.tag),
        )
        .in_file(self.file_name());
        self.record(error);
    }
}
