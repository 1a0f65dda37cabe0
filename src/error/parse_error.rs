use thiserror::Error;

use crate::report::Location;

/// Errors produced by the lexer.
///
/// `UnexpectedCharacter` is the default so the generated lexer can use it for
/// any input that matches no token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// A string literal that reaches the end of input before its closing
    /// quote.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A syntax error raised by the parser.
///
/// The error is reported to the diagnostic sink when it is created; the value
/// is then returned up to the enclosing declaration, which discards tokens
/// until a statement boundary and resumes parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error {location}: {message}")]
pub struct ParseError {
    /// The line of the offending token.
    pub line:     usize,
    /// Where on that line the error occurred.
    pub location: Location,
    /// What was expected.
    pub message:  String,
}
