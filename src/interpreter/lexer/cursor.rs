use logos::Lexer;

use crate::interpreter::lexer::TokenKind;

/// Character-level view of the input that the generated lexer has not yet
/// consumed.
///
/// Advancing the cursor extends the current token's span and keeps the
/// lexer's line counter in step with every newline consumed.
pub struct Cursor<'l, 's> {
    lexer: &'l mut Lexer<'s, TokenKind>,
}

impl<'l, 's> Cursor<'l, 's> {
    /// Wraps the lexer positioned at the end of the current token.
    pub const fn new(lexer: &'l mut Lexer<'s, TokenKind>) -> Self {
        Self { lexer }
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.lexer.remainder().chars().next()
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.lexer.bump(ch.len_utf8());
        if ch == '\n' {
            self.lexer.extras.line += 1;
        }
        Some(ch)
    }

    /// The current line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Byte offset of the next unconsumed character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }
}
