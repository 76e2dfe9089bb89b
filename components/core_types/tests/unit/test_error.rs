//! Unit tests for SyntaxError, ErrorKind and Error

use core_types::{Error, ErrorKind, Location, SyntaxError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_parser_errors_are_recoverable() {
        for kind in [
            ErrorKind::UnexpectedToken,
            ErrorKind::MissingComma,
            ErrorKind::InvalidAssignment,
            ErrorKind::InvalidLiteral,
            ErrorKind::NestingTooDeep,
        ] {
            assert!(kind.is_recoverable(), "{:?}", kind);
        }
    }

    #[test]
    fn test_lexer_errors_are_fatal() {
        assert!(!ErrorKind::UnterminatedString.is_recoverable());
        assert!(!ErrorKind::InvalidCharacter.is_recoverable());
    }
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    fn sample() -> SyntaxError {
        SyntaxError::new(
            ErrorKind::UnexpectedToken,
            Location::new(1, 5, 1, 6),
            r#"unexpected token - "+="(LetAdd) for beginning of expression"#,
        )
    }

    #[test]
    fn test_syntax_error_fields() {
        let err = sample();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.location, Location::new(1, 5, 1, 6));
        assert!(err.file_name.is_empty());
        assert!(err.message.starts_with("unexpected token"));
    }

    #[test]
    fn test_syntax_error_display_with_file() {
        let err = sample().in_file("test.goore");
        assert_eq!(
            err.to_string(),
            r#"test.goore:(1:5):(1:6): unexpected token - "+="(LetAdd) for beginning of expression"#
        );
    }

    #[test]
    fn test_syntax_error_clone_is_equal() {
        let err = sample();
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_syntax_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(sample());
        assert!(err.to_string().contains("unexpected token"));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_syntax() {
        let syntax = SyntaxError::new(ErrorKind::InvalidCharacter, Location::default(), "bad");
        let err: Error = syntax.into();
        assert!(matches!(err, Error::Syntax(ref e) if e.kind == ErrorKind::InvalidCharacter));
    }
}
