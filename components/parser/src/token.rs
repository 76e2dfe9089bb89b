//! Token types and the fixed keyword/operator tables

use core_types::Location;
use serde::Serialize;
use std::fmt;

/// Category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenTag {
    /// End of input
    EOF,

    /// Integer literal
    IntLiteral,
    /// Float literal
    FloatLiteral,
    /// String literal
    StringLiteral,
    /// Identifier
    Identifier,

    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `>`
    Gt,
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
    /// `=`
    Let,
    /// `+=`
    LetAdd,
    /// `-=`
    LetSub,
    /// `*=`
    LetMul,
    /// `/=`
    LetDiv,
    /// `%=`
    LetMod,
    /// `!`
    Bang,
    /// `->`
    Arrow,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// Significant line break
    Newline,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,

    /// `true`
    True,
    /// `false`
    False,
    /// `nil`
    Nil,
    /// `def`
    Def,
    /// `if`
    If,
    /// `elsif`
    Elsif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `return`
    Return,
}

impl TokenTag {
    /// Whether a line break right after a token of this kind ends a statement
    pub fn requests_newline(self) -> bool {
        matches!(
            self,
            TokenTag::IntLiteral
                | TokenTag::FloatLiteral
                | TokenTag::StringLiteral
                | TokenTag::Identifier
                | TokenTag::RightParen
                | TokenTag::RightBrace
                | TokenTag::RightBracket
                | TokenTag::True
                | TokenTag::False
                | TokenTag::Nil
                | TokenTag::Break
                | TokenTag::Continue
                | TokenTag::Return
        )
    }

    /// Whether this is `=` or one of the compound assignment operators
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenTag::Let
                | TokenTag::LetAdd
                | TokenTag::LetSub
                | TokenTag::LetMul
                | TokenTag::LetDiv
                | TokenTag::LetMod
        )
    }

    /// Whether a token of this kind ends a simple statement
    pub fn is_terminator(self) -> bool {
        matches!(self, TokenTag::Newline | TokenTag::Semicolon)
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Keyword table, consulted after an identifier has been scanned
pub const KEYWORDS: &[(&str, TokenTag)] = &[
    ("true", TokenTag::True),
    ("false", TokenTag::False),
    ("nil", TokenTag::Nil),
    ("def", TokenTag::Def),
    ("if", TokenTag::If),
    ("elsif", TokenTag::Elsif),
    ("else", TokenTag::Else),
    ("while", TokenTag::While),
    ("break", TokenTag::Break),
    ("continue", TokenTag::Continue),
    ("return", TokenTag::Return),
];

/// Operator and punctuation table.
///
/// `}` is missing on purpose: the lexer handles it before operator scanning
/// because it interacts with newline insertion.
pub const OPERATORS: &[(&str, TokenTag)] = &[
    ("==", TokenTag::Eq),
    ("!=", TokenTag::Ne),
    ("<=", TokenTag::Le),
    (">=", TokenTag::Ge),
    ("<", TokenTag::Lt),
    (">", TokenTag::Gt),
    ("+", TokenTag::Add),
    ("-", TokenTag::Sub),
    ("*", TokenTag::Mul),
    ("/", TokenTag::Div),
    ("%", TokenTag::Mod),
    ("=", TokenTag::Let),
    ("+=", TokenTag::LetAdd),
    ("-=", TokenTag::LetSub),
    ("*=", TokenTag::LetMul),
    ("/=", TokenTag::LetDiv),
    ("%=", TokenTag::LetMod),
    ("!", TokenTag::Bang),
    ("->", TokenTag::Arrow),
    (",", TokenTag::Comma),
    (":", TokenTag::Colon),
    (";", TokenTag::Semicolon),
    ("(", TokenTag::LeftParen),
    (")", TokenTag::RightParen),
    ("{", TokenTag::LeftBrace),
    ("[", TokenTag::LeftBracket),
    ("]", TokenTag::RightBracket),
];

/// Look up a keyword
pub fn keyword(text: &str) -> Option<TokenTag> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, tag)| tag)
}

/// Look up an operator or punctuation lexeme exactly
pub fn operator(text: &str) -> Option<TokenTag> {
    OPERATORS
        .iter()
        .find(|(lexeme, _)| *lexeme == text)
        .map(|&(_, tag)| tag)
}

/// Whether some operator starts with `prefix`
pub fn is_operator_prefix(prefix: &str) -> bool {
    OPERATORS
        .iter()
        .any(|(lexeme, _)| lexeme.starts_with(prefix))
}

/// A lexical unit: tag, source text and span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Token category
    pub tag: TokenTag,
    /// Source text (unescaped for string literals)
    pub value: String,
    /// Where the token is in the source
    pub location: Location,
}

impl Token {
    /// Create a token
    pub fn new(tag: TokenTag, value: impl Into<String>, location: Location) -> Self {
        Self {
            tag,
            value: value.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Token:{}>:{}:{:?}", self.location, self.tag, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("elsif"), Some(TokenTag::Elsif));
        assert_eq!(keyword("return"), Some(TokenTag::Return));
        assert_eq!(keyword("elif"), None);
        assert_eq!(keyword("True"), None);
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(operator("%="), Some(TokenTag::LetMod));
        assert_eq!(operator("->"), Some(TokenTag::Arrow));
        assert_eq!(operator("}"), None);
        assert_eq!(operator("=>"), None);
    }

    #[test]
    fn test_operator_prefixes() {
        assert!(is_operator_prefix("="));
        assert!(is_operator_prefix("!"));
        assert!(is_operator_prefix("-"));
        assert!(!is_operator_prefix("=>"));
        assert!(!is_operator_prefix("+=="));
        assert!(!is_operator_prefix("&"));
    }

    #[test]
    fn test_requests_newline() {
        assert!(TokenTag::Identifier.requests_newline());
        assert!(TokenTag::RightBrace.requests_newline());
        assert!(TokenTag::Return.requests_newline());
        assert!(!TokenTag::Add.requests_newline());
        assert!(!TokenTag::Comma.requests_newline());
        assert!(!TokenTag::LeftBrace.requests_newline());
        assert!(!TokenTag::Newline.requests_newline());
        assert!(!TokenTag::Def.requests_newline());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenTag::Identifier, "hoge", Location::new(1, 1, 1, 4));
        assert_eq!(token.to_string(), r#"#<Token:(1:1):(1:4)>:Identifier:"hoge""#);
    }
}
