//! Recursive descent parser for goore statements

use crate::ast::{Expression, Identifier, Node, Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenTag};
use core_types::{Error, ErrorKind, Location, Pushback, Result, SyntaxError};
use std::io::{BufRead, BufReader, Read};

/// Parse an in-memory source
pub fn parse_str(source: &str, file_name: &str) -> Result<Program> {
    Parser::new(Lexer::new(source.as_bytes()), file_name).parse_program()
}

/// Parse everything `reader` yields
pub fn parse_reader<R: Read>(reader: R, file_name: &str) -> Result<Program> {
    Parser::new(Lexer::new(BufReader::new(reader)), file_name).parse_program()
}

/// Deepest nesting of expressions and blocks the parser accepts
pub const MAX_NESTING: usize = 64;

/// goore parser.
///
/// Looks at most one token ahead. Syntax errors that only spoil a single
/// statement are recorded and the statement becomes an
/// [`Statement::InvalidStatement`]; I/O failures and lexical errors abort
/// the parse.
pub struct Parser<R> {
    lexer: Lexer<R>,
    file_name: String,
    lookahead: Pushback<Token>,
    errors: Vec<SyntaxError>,
    depth: usize,
    // braces read so far minus braces closed; tells recovery which `}` is
    // the enclosing block's
    braces: isize,
}

impl<R: BufRead> Parser<R> {
    /// Create a parser reading tokens from `lexer`
    pub fn new(lexer: Lexer<R>, file_name: impl Into<String>) -> Self {
        Self {
            lexer,
            file_name: file_name.into(),
            lookahead: Pushback::new(),
            errors: Vec::new(),
            depth: 0,
            braces: 0,
        }
    }

    /// Parse the whole source into a [`Program`]
    pub fn parse_program(mut self) -> Result<Program> {
        let (statements, _) = self.parse_statements(TokenTag::EOF)?;
        let location = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => Location::merge(first.location(), last.location()),
            _ => Location::new(1, 1, 1, 1),
        };
        Ok(Program {
            file_name: self.file_name,
            statements,
            errors: self.errors,
            location,
        })
    }

    /// Name diagnostics are attributed to
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn next_token(&mut self) -> Result<Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token().map_err(|e| match e {
                Error::Syntax(error) => Error::Syntax(error.in_file(self.file_name.as_str())),
                other => other,
            })?,
        };
        match token.tag {
            TokenTag::LeftBrace => self.braces += 1,
            TokenTag::RightBrace => self.braces -= 1,
            _ => {}
        }
        Ok(token)
    }

    pub(crate) fn push_back(&mut self, token: Token) {
        match token.tag {
            TokenTag::LeftBrace => self.braces -= 1,
            TokenTag::RightBrace => self.braces += 1,
            _ => {}
        }
        self.lookahead.push(token);
    }

    pub(crate) fn peek_token(&mut self) -> Result<Token> {
        let token = self.next_token()?;
        self.push_back(token.clone());
        Ok(token)
    }

    pub(crate) fn peek_tag(&mut self) -> Result<TokenTag> {
        let token = self.next_token()?;
        let tag = token.tag;
        self.push_back(token);
        Ok(tag)
    }

    pub(crate) fn syntax_error(
        &self,
        kind: ErrorKind,
        location: Location,
        message: impl Into<String>,
    ) -> Error {
        Error::Syntax(SyntaxError::new(kind, location, message).in_file(self.file_name.as_str()))
    }

    /// Report `token` as out of place.
    ///
    /// A statement terminator, `}` or `EOF` is handed back so that recovery
    /// sees it: a terminator ends the bad statement and a `}` may close the
    /// enclosing block.
    pub(crate) fn unexpected(&mut self, token: Token, hint: &str) -> Error {
        let error = self.syntax_error(
            ErrorKind::UnexpectedToken,
            token.location,
            format!("unexpected token - {:?}({}) {}", token.value, token.tag, hint),
        );
        if token.tag.is_terminator()
            || token.tag == TokenTag::RightBrace
            || token.tag == TokenTag::EOF
        {
            self.push_back(token);
        }
        error
    }

    /// Run `parse` one nesting level deeper, failing past [`MAX_NESTING`]
    pub(crate) fn descend<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= MAX_NESTING {
            let token = self.peek_token()?;
            return Err(self.syntax_error(
                ErrorKind::NestingTooDeep,
                token.location,
                format!("nesting deeper than {} levels", MAX_NESTING),
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn expect(&mut self, tag: TokenTag, hint: &str) -> Result<Token> {
        let token = self.next_token()?;
        if token.tag != tag {
            return Err(self.unexpected(token, hint));
        }
        Ok(token)
    }

    pub(crate) fn expect_terminator(&mut self, hint: &str) -> Result<Token> {
        let token = self.next_token()?;
        if !token.tag.is_terminator() {
            return Err(self.unexpected(token, hint));
        }
        Ok(token)
    }

    /// Record a recoverable error without abandoning the current statement
    pub(crate) fn record(&mut self, error: SyntaxError) {
        tracing::debug!(%error, "recorded syntax error");
        self.errors.push(error);
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier> {
        let token = self.expect(TokenTag::Identifier, "expect identifier")?;
        Ok(Identifier {
            name: token.value,
            location: token.location,
        })
    }

    /// Statements up to `terminator`; returns them with the terminator token
    pub(crate) fn parse_statements(
        &mut self,
        terminator: TokenTag,
    ) -> Result<(Vec<Statement>, Token)> {
        let mut statements = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.tag == terminator {
                return Ok((statements, token));
            }
            if token.tag == TokenTag::EOF {
                return Err(self.unexpected(token, "expect right brace to close block"));
            }
            self.push_back(token);
            if let Some(statement) = self.parse_statement(terminator)? {
                statements.push(statement);
            }
        }
    }

    /// `{ statements }`; returns the body with the closing brace
    pub(crate) fn parse_block(&mut self) -> Result<(Vec<Statement>, Token)> {
        self.descend(|p| {
            p.expect(TokenTag::LeftBrace, "expect left brace to begin block")?;
            p.parse_statements(TokenTag::RightBrace)
        })
    }

    /// One statement of a sequence ended by `terminator`
    fn parse_statement(&mut self, terminator: TokenTag) -> Result<Option<Statement>> {
        let first = self.peek_token()?;
        let braces = self.braces;
        let parsed = match first.tag {
            TokenTag::Semicolon => self.parse_empty(),
            TokenTag::Def => self.parse_def().map(Some),
            TokenTag::While => self.parse_while().map(Some),
            TokenTag::Break => self.parse_break().map(Some),
            TokenTag::Continue => self.parse_continue().map(Some),
            TokenTag::Return => self.parse_return().map(Some),
            _ => self.parse_expression_statement().map(Some),
        };

        match parsed {
            Err(Error::Syntax(error)) if error.kind.is_recoverable() => {
                let in_block = terminator == TokenTag::RightBrace;
                self.recover(first.location, error, braces, in_block).map(Some)
            }
            other => other,
        }
    }

    /// Skip the rest of a failed statement.
    ///
    /// Discards through the first terminator outside any brace the statement
    /// opened. Inside a block, the `}` closing that block is left for it.
    fn recover(
        &mut self,
        start: Location,
        error: SyntaxError,
        braces: isize,
        in_block: bool,
    ) -> Result<Statement> {
        self.record(error.clone());
        let mut end = error.location;
        loop {
            let token = self.next_token()?;
            if in_block && token.tag == TokenTag::RightBrace && self.braces < braces {
                self.push_back(token);
                break;
            }
            end = token.location;
            let done = match token.tag {
                TokenTag::EOF => true,
                tag => tag.is_terminator() && self.braces <= braces,
            };
            if done {
                break;
            }
        }

        tracing::debug!(from = %start, to = %end, "skipped invalid statement");
        Ok(Statement::InvalidStatement {
            error,
            location: Location::merge(start, end),
        })
    }

    fn parse_empty(&mut self) -> Result<Option<Statement>> {
        self.next_token()?;
        Ok(None)
    }

    fn parse_def(&mut self) -> Result<Statement> {
        let keyword = self.next_token()?;
        let name = self.parse_identifier()?;

        let token = self.next_token()?;
        if token.tag.is_terminator() {
            return Ok(Statement::Def {
                name,
                init: None,
                location: Location::merge(keyword.location, token.location),
            });
        }
        if token.tag != TokenTag::Let {
            return Err(self.unexpected(token, "expect '=', newline or semicolon"));
        }

        let init = self.parse_expression_lowest()?;
        let end = self.expect_terminator("expect newline or semicolon to terminate def statement")?;
        Ok(Statement::Def {
            name,
            init: Some(init),
            location: Location::merge(keyword.location, end.location),
        })
    }

    fn parse_while(&mut self) -> Result<Statement> {
        let keyword = self.next_token()?;
        let condition = self.parse_expression_lowest()?;
        let (body, right_brace) = self.parse_block()?;

        let token = self.next_token()?;
        if token.tag != TokenTag::Newline {
            self.push_back(token);
        }
        Ok(Statement::While {
            condition,
            body,
            location: Location::merge(keyword.location, right_brace.location),
        })
    }

    fn parse_break(&mut self) -> Result<Statement> {
        let keyword = self.next_token()?;
        let end = self.expect_terminator("expect newline or semicolon to terminate break statement")?;
        Ok(Statement::Break {
            location: Location::merge(keyword.location, end.location),
        })
    }

    fn parse_continue(&mut self) -> Result<Statement> {
        let keyword = self.next_token()?;
        let end =
            self.expect_terminator("expect newline or semicolon to terminate continue statement")?;
        Ok(Statement::Continue {
            location: Location::merge(keyword.location, end.location),
        })
    }

    fn parse_return(&mut self) -> Result<Statement> {
        let keyword = self.next_token()?;

        let token = self.next_token()?;
        if token.tag.is_terminator() {
            return Ok(Statement::Return {
                value: None,
                location: Location::merge(keyword.location, token.location),
            });
        }
        self.push_back(token);

        let value = self.parse_expression_lowest()?;
        let end =
            self.expect_terminator("expect newline or semicolon to terminate return statement")?;
        Ok(Statement::Return {
            value: Some(value),
            location: Location::merge(keyword.location, end.location),
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let expression: Expression = self.parse_expression_lowest()?;
        let end = self.expect_terminator("to terminate expression statement")?;
        let location = Location::merge(expression.location(), end.location);
        Ok(Statement::ExpressionStatement {
            expression,
            location,
        })
    }
}
