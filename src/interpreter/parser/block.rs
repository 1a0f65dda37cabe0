use crate::{
    ast::Stmt,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses the statements of a block after its opening brace.
    ///
    /// Declarations are parsed until a closing `}` or the end of input.
    /// A declaration with a syntax error is skipped after recovery, so the
    /// rest of the block is still parsed.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// # Returns
    /// The statements of the block, in source order.
    pub(super) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;

        Ok(statements)
    }
}
