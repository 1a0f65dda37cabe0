use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
};

impl Parser<'_, '_> {
    /// Parses a comma-separated list of items up to, but not including, a
    /// closing `)`.
    ///
    /// This utility is shared by parameter lists and call arguments. An
    /// immediately encountered `)` produces an empty list. Lists longer than
    /// [`MAX_ARGUMENTS`] are reported once without stopping the parse.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `what`: Plural noun used in the length error message.
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Errors
    /// Propagates the first error from `parse_item`.
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           what: &str,
                                           mut parse_item: impl FnMut(&mut Self)
                                                                  -> ParseResult<T>)
                                           -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(items);
        }

        loop {
            if items.len() == MAX_ARGUMENTS {
                let token = self.peek().clone();
                self.error(&token, &format!("Can't have more than {MAX_ARGUMENTS} {what}."));
            }
            items.push(parse_item(self)?);

            if !self.match_any(&[TokenKind::Comma]) {
                break;
            }
        }

        Ok(items)
    }
}
