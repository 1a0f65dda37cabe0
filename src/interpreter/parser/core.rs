use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
    report::{Location, Reporter},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of parameters or call arguments.
pub const MAX_ARGUMENTS: usize = 255;

/// Recursive-descent parser over a scanned token sequence.
///
/// Syntax errors are reported through the [`Reporter`] the moment they are
/// found. Fatal ones are also returned as [`ParseError`] so that the enclosing
/// declaration can resynchronize; non-fatal ones (too many arguments, invalid
/// assignment targets) let parsing carry on in place.
pub struct Parser<'t, 'r> {
    pub(super) tokens:   &'t [Token],
    pub(super) current:  usize,
    pub(super) reporter: &'r mut dyn Reporter,
    eof:                 Token,
}

/// Parses a token sequence into statements.
///
/// Grammar: `program := declaration* EOF`
///
/// Declarations that fail to parse are dropped after their errors have been
/// reported, so the result holds every statement that parsed cleanly.
///
/// ## Example
/// ```
/// use treelox::{
///     ast::Stmt,
///     interpreter::{lexer::scan, parser::core::parse},
///     report::ErrorReport,
/// };
///
/// let mut report = ErrorReport::silent();
/// let tokens = scan("var a = 1; print a;", &mut report);
/// let statements = parse(&tokens, &mut report);
///
/// assert_eq!(statements.len(), 2);
/// assert!(matches!(statements[1], Stmt::Print { .. }));
/// ```
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, reporter);
    let mut statements = Vec::new();

    while !parser.is_at_end() {
        if let Some(statement) = parser.declaration() {
            statements.push(statement);
        }
    }

    statements
}

impl<'t, 'r> Parser<'t, 'r> {
    /// Creates a parser positioned at the first token.
    ///
    /// A token sequence without a trailing EOF token is treated as if it had
    /// one after its last token.
    pub fn new(tokens: &'t [Token], reporter: &'r mut dyn Reporter) -> Self {
        let line = tokens.last().map_or(1, |t| t.line);
        Self { tokens,
               current: 0,
               reporter,
               eof: Token::eof(line) }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Returns the current token without consuming it.
    pub(super) fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Returns the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.eof)
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Tests whether the current token has the given kind. Never true at the
    /// end of input.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token and returns it.
    pub(super) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Consumes the current token if it has one of the given kinds.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.current += 1;
            return true;
        }
        false
    }

    /// Consumes a token of the given kind, or raises `message` at the current
    /// token.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let token = self.peek().clone();
        Err(self.error(&token, message))
    }

    /// Reports a syntax error at `token` and returns it for unwinding.
    pub(super) fn error(&mut self, token: &Token, message: &str) -> ParseError {
        let location = if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::At(token.lexeme.clone())
        };
        self.reporter.report(token.line, location.clone(), message);

        ParseError { line: token.line,
                     location,
                     message: message.to_string() }
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops after a `;`, or before a keyword that starts a declaration or
    /// statement.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }
            if matches!(self.peek().kind,
                        TokenKind::Class
                        | TokenKind::Fun
                        | TokenKind::Var
                        | TokenKind::For
                        | TokenKind::If
                        | TokenKind::While
                        | TokenKind::Print
                        | TokenKind::Return)
            {
                break;
            }
            self.advance();
        }

        debug!(line = self.peek().line, token = %self.peek().lexeme, "parser resynchronized");
    }
}
