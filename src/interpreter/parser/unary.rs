use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a prefix unary expression.
    ///
    /// Unary operators are right-associative, so `!!x` is `!(!x)`.
    ///
    /// Grammar: `unary := ("!" | "-") unary | call`
    pub(super) fn parse_unary(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let token = self.previous();
            let op = if token.kind == TokenKind::Bang {
                UnaryOperator::Not
            } else {
                UnaryOperator::Negate
            };
            let line = token.line;
            let right = self.parse_unary()?;

            return Ok(Expr::Unary { op,
                                    right: Box::new(right),
                                    line });
        }

        self.parse_call()
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// Grammar: `call := primary ("(" arguments? ")")*`
    ///
    /// Each call remembers the line of its closing parenthesis, which is
    /// where runtime call errors are reported.
    fn parse_call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.match_any(&[TokenKind::LeftParen]) {
            let arguments = self.parse_comma_separated("arguments", Self::expression)?;
            let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

            expr = Expr::Call { callee: Box::new(expr),
                                arguments,
                                line: paren.line };
        }

        Ok(expr)
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER | STRING | "false" | "true" | "nil"
    ///          | "(" expression ")" | IDENT
    /// ```
    ///
    /// # Errors
    /// Anything else raises "Expect expression." at the current token.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek().clone();

        let value = match token.kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            TokenKind::Number | TokenKind::String => token.literal.unwrap_or(LiteralValue::Nil),
            TokenKind::Identifier => {
                self.advance();
                return Ok(Expr::Variable { name: token.lexeme,
                                           line: token.line, });
            },
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;

                return Ok(Expr::Grouping { expression: Box::new(expression) });
            },
            _ => return Err(self.error(&token, "Expect expression.")),
        };
        self.advance();

        Ok(Expr::Literal { value })
    }
}
