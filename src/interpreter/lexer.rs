/// Character-level lookahead over the unscanned source.
///
/// Used by lexer callbacks that need to consume more than a regular
/// expression can describe, such as string literals whose newlines must be
/// counted.
pub mod cursor;


use logos::Logos;
use tracing::{debug, trace};

use crate::{
    ast::LiteralValue,
    error::LexError,
    interpreter::lexer::cursor::Cursor,
    report::{Location, Reporter},
};

/// The kind of a lexical token.
///
/// The lexer is generated from the attributes below. Keywords are listed as
/// exact tokens so they win over the identifier pattern; whitespace, comments
/// and newlines are skipped (newlines bump the line counter first).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras, error = LexError)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens such as `"hello"`. May span lines.
    #[token("\"", lex_string)]
    String,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by the generated lexer; [`scan`] appends
    /// exactly one.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token: its kind, the exact source slice it was scanned from, its parsed
/// literal (numbers and strings only) and its line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The parsed value of a number or string literal.
    pub literal: Option<LiteralValue>,
    /// The line the token ended on.
    pub line:    usize,
}

impl Token {
    /// Builds a token from its kind and lexeme, parsing the literal value of
    /// numbers and strings.
    ///
    /// ## Example
    /// ```
    /// use treelox::{
    ///     ast::LiteralValue,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 1);
    ///
    /// assert_eq!(token.literal, Some(LiteralValue::String("hi".to_string())));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(LiteralValue::Number),
            TokenKind::String => lexeme.strip_prefix('"')
                                       .and_then(|s| s.strip_suffix('"'))
                                       .map(LiteralValue::from),
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Builds the end-of-input token.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

/// Scans source text into tokens.
///
/// The scan is a single left-to-right pass. Unexpected characters and
/// unterminated strings are reported through `reporter` and skipped; an
/// unterminated string consumes the rest of the input. The result always
/// ends with one [`TokenKind::Eof`] token.
///
/// ## Example
/// ```
/// use treelox::{
///     interpreter::lexer::{TokenKind, scan},
///     report::ErrorReport,
/// };
///
/// let mut report = ErrorReport::silent();
/// let tokens = scan("a != 3;", &mut report);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::BangEqual,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(!report.had_error);
/// ```
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(error) => reporter.report(line, Location::Nowhere, &error.to_string()),
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!(count = tokens.len(), lines = lexer.extras.line, "scanned source");

    tokens
}

/// Consumes the body of a string literal after its opening quote.
///
/// Newlines inside the literal advance the line counter, so the token reports
/// the line of its closing quote.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    let mut cursor = Cursor::new(lex);

    while let Some(ch) = cursor.advance() {
        if ch == '"' {
            return Ok(());
        }
    }

    trace!(line = cursor.line(), offset = cursor.offset(), "string runs to end of input");
    Err(LexError::UnterminatedString)
}
