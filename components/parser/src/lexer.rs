//! goore lexer - turns a character stream into tokens on demand

use crate::token::{self, Token, TokenTag};
use core_types::{Error, ErrorKind, Location, Position, Pushback, Result, SyntaxError};
use std::io::{self, BufRead};

/// Scanner state within a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Comment,
    ZeroDigit,
    Integer,
    Float,
    String,
    StringEscape,
    Identifier,
    Operator,
}

/// Decodes UTF-8 from a buffered reader one scalar value at a time
struct CharReader<R> {
    inner: R,
}

impl<R: BufRead> CharReader<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = match first {
            0x00..=0x7F => return Ok(Some(char::from(first))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_utf8()),
        };

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or_else(invalid_utf8)?;
        }
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(invalid_utf8)
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "source is not valid UTF-8")
}

/// Lexer for goore source code.
///
/// Pull-based: every call to [`next_token`](Lexer::next_token) reads just
/// enough characters to produce one token. Once the input is exhausted it
/// returns `EOF` forever.
///
/// A raw line break is only reported as a [`TokenTag::Newline`] when the
/// previous token asks for one (see [`TokenTag::requests_newline`]);
/// otherwise it is plain whitespace. A `}` after such a token is preceded by
/// an inserted `Newline`, and a missing final line break is supplied at end
/// of input.
///
/// # Examples
///
/// ```
/// use parser::{Lexer, TokenTag};
///
/// let mut lexer = Lexer::new("x +\n1".as_bytes());
/// let tags: Vec<TokenTag> = lexer
///     .tokenize()
///     .unwrap()
///     .into_iter()
///     .map(|t| t.tag)
///     .collect();
///
/// assert_eq!(
///     tags,
///     vec![
///         TokenTag::Identifier,
///         TokenTag::Add,
///         TokenTag::IntLiteral,
///         TokenTag::Newline,
///         TokenTag::EOF,
///     ]
/// );
/// ```
pub struct Lexer<R> {
    reader: CharReader<R>,
    line: u32,
    column: u32,
    pending: Pushback<(char, Position)>,
    last_tag: Option<TokenTag>,
}

impl<R: BufRead> Lexer<R> {
    /// Create a new lexer reading from `source`
    pub fn new(source: R) -> Self {
        Self {
            reader: CharReader { inner: source },
            line: 1,
            column: 1,
            pending: Pushback::new(),
            last_tag: None,
        }
    }

    /// Get the next token from the source
    pub fn next_token(&mut self) -> Result<Token> {
        let token = self.scan_token()?;
        tracing::trace!(%token, "lexed");
        self.last_tag = Some(token.tag);
        Ok(token)
    }

    /// Read every remaining token, up to and including `EOF`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.tag == TokenTag::EOF;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Current read position
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn newline_required(&self) -> bool {
        self.last_tag.is_some_and(TokenTag::requests_newline)
    }

    fn scan_token(&mut self) -> Result<Token> {
        let mut state = State::Initial;
        let mut tag = TokenTag::EOF;
        let mut text = String::new();
        let mut location = Location::at(self.position());

        loop {
            let (c, at) = match self.getc()? {
                Some(read) => read,
                None => return self.finish_at_eof(state, tag, text, location),
            };

            match state {
                State::Initial => {
                    if c != '\n' && c.is_whitespace() {
                        continue;
                    }
                    location = Location::at(at);
                    match c {
                        '\n' => {
                            if self.newline_required() {
                                return Ok(Token::new(TokenTag::Newline, "\n", location));
                            }
                        }
                        '}' => {
                            if self.newline_required() {
                                self.ungetc(c, at);
                                return Ok(Token::new(TokenTag::Newline, "\n", location));
                            }
                            return Ok(Token::new(TokenTag::RightBrace, "}", location));
                        }
                        '#' => state = State::Comment,
                        '0' => {
                            tag = TokenTag::IntLiteral;
                            text.push(c);
                            state = State::ZeroDigit;
                        }
                        '"' => {
                            tag = TokenTag::StringLiteral;
                            state = State::String;
                        }
                        _ if c.is_ascii_digit() => {
                            tag = TokenTag::IntLiteral;
                            text.push(c);
                            state = State::Integer;
                        }
                        _ if is_identifier_start(c) => {
                            tag = TokenTag::Identifier;
                            text.push(c);
                            state = State::Identifier;
                        }
                        _ => {
                            text.push(c);
                            state = State::Operator;
                        }
                    }
                }

                State::Comment => {
                    if c == '\n' {
                        self.ungetc(c, at);
                        state = State::Initial;
                    }
                }

                State::ZeroDigit => {
                    if c != '.' {
                        self.ungetc(c, at);
                        return Ok(Token::new(tag, text, location));
                    }
                    text.push(c);
                    location = location.extended_to(at);
                    tag = TokenTag::FloatLiteral;
                    state = State::Float;
                }

                State::Integer => {
                    if c.is_ascii_digit() {
                        text.push(c);
                        location = location.extended_to(at);
                    } else if c == '.' {
                        text.push(c);
                        location = location.extended_to(at);
                        tag = TokenTag::FloatLiteral;
                        state = State::Float;
                    } else {
                        self.ungetc(c, at);
                        return Ok(Token::new(tag, text, location));
                    }
                }

                State::Float => {
                    if !c.is_ascii_digit() {
                        self.ungetc(c, at);
                        return Ok(Token::new(tag, text, location));
                    }
                    text.push(c);
                    location = location.extended_to(at);
                }

                State::String => {
                    location = location.extended_to(at);
                    match c {
                        '\\' => state = State::StringEscape,
                        '"' => return Ok(Token::new(tag, text, location)),
                        _ => text.push(c),
                    }
                }

                State::StringEscape => {
                    text.push(if c == 'n' { '\n' } else { c });
                    location = location.extended_to(at);
                    state = State::String;
                }

                State::Identifier => {
                    if !is_identifier_continue(c) {
                        self.ungetc(c, at);
                        return Ok(identifier_or_keyword(text, location));
                    }
                    text.push(c);
                    location = location.extended_to(at);
                }

                State::Operator => {
                    text.push(c);
                    if !token::is_operator_prefix(&text) {
                        text.pop();
                        self.ungetc(c, at);
                        return finish_operator(text, location);
                    }
                    location = location.extended_to(at);
                }
            }
        }
    }

    fn finish_at_eof(
        &mut self,
        state: State,
        tag: TokenTag,
        text: String,
        location: Location,
    ) -> Result<Token> {
        match state {
            State::Initial | State::Comment => {
                let here = Location::at(self.position());
                if self.newline_required() {
                    Ok(Token::new(TokenTag::Newline, "\n", here))
                } else {
                    Ok(Token::new(TokenTag::EOF, "", here))
                }
            }
            State::ZeroDigit | State::Integer | State::Float => Ok(Token::new(tag, text, location)),
            State::String | State::StringEscape => Err(Error::Syntax(SyntaxError::new(
                ErrorKind::UnterminatedString,
                Location::at(location.start),
                "unterminated string literal",
            ))),
            State::Identifier => Ok(identifier_or_keyword(text, location)),
            State::Operator => finish_operator(text, location),
        }
    }

    fn getc(&mut self) -> Result<Option<(char, Position)>> {
        let read = match self.pending.take() {
            Some(read) => read,
            None => match self.reader.next_char()? {
                Some(c) => (c, self.position()),
                None => return Ok(None),
            },
        };

        let (c, at) = read;
        if c == '\n' {
            self.line = at.line + 1;
            self.column = 1;
        } else {
            self.line = at.line;
            self.column = at.column + 1;
        }
        Ok(Some(read))
    }

    fn ungetc(&mut self, c: char, at: Position) {
        self.pending.push((c, at));
        self.line = at.line;
        self.column = at.column;
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn identifier_or_keyword(text: String, location: Location) -> Token {
    let tag = token::keyword(&text).unwrap_or(TokenTag::Identifier);
    Token::new(tag, text, location)
}

fn finish_operator(text: String, location: Location) -> Result<Token> {
    match token::operator(&text) {
        Some(tag) => Ok(Token::new(tag, text, location)),
        None => {
            let c = text.chars().next().unwrap_or_default();
            Err(Error::Syntax(SyntaxError::new(
                ErrorKind::InvalidCharacter,
                Location::at(location.start),
                format!("invalid character - {:?}", c),
            )))
        }
    }
}
