use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses an assignment or anything of higher precedence.
    ///
    /// The left-hand side is parsed as an ordinary expression first; only if
    /// it turns out to be a bare variable does it become an assignment target.
    /// Assignment is right-associative.
    ///
    /// Grammar: `assignment := IDENT "=" assignment | logic_or`
    ///
    /// # Errors
    /// Any other target is reported as "Invalid assignment target." at the
    /// `=` token. That error does not unwind; the left-hand side is returned
    /// as-is and parsing continues.
    pub(super) fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_logical_or()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable { name, line } = &expr {
                return Ok(Expr::Assign { name:  name.clone(),
                                         value: Box::new(value),
                                         line:  *line, });
            }

            self.error(&equals, "Invalid assignment target.");
        }

        Ok(expr)
    }

    /// Parses a logical OR expression.
    ///
    /// Grammar: `logic_or := logic_and ("or" logic_and)*`
    fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;

        while self.match_any(&[TokenKind::Or]) {
            let line = self.previous().line;
            let right = self.parse_logical_and()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::Or,
                                   right: Box::new(right),
                                   line };
        }

        Ok(left)
    }

    /// Parses a logical AND expression.
    ///
    /// Grammar: `logic_and := equality ("and" equality)*`
    fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;

        while self.match_any(&[TokenKind::And]) {
            let line = self.previous().line;
            let right = self.parse_equality()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::And,
                                   right: Box::new(right),
                                   line };
        }

        Ok(left)
    }

    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::BangEqual, TokenKind::EqualEqual],
                                Self::parse_comparison)
    }

    /// Grammar: `comparison := addition ((">" | ">=" | "<" | "<=") addition)*`
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Greater,
                                  TokenKind::GreaterEqual,
                                  TokenKind::Less,
                                  TokenKind::LessEqual],
                                Self::parse_additive)
    }

    /// Grammar: `addition := multiplication (("-" | "+") multiplication)*`
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Minus, TokenKind::Plus],
                                Self::parse_multiplicative)
    }

    /// Grammar: `multiplication := unary (("/" | "*") unary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Slash, TokenKind::Star], Self::parse_unary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// `operand` parses the next-higher level; operators in `operators` chain
    /// its results from left to right.
    fn parse_binary_level(&mut self,
                          operators: &[TokenKind],
                          operand: fn(&mut Self) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while self.match_any(operators) {
            let token = self.previous();
            let (kind, line) = (token.kind, token.line);
            let right = operand(self)?;
            left = Expr::Binary { left: Box::new(left),
                                  op: binary_operator(kind),
                                  right: Box::new(right),
                                  line };
        }

        Ok(left)
    }
}

/// Maps an operator token kind to its AST operator.
///
/// Only called with kinds listed by one of the binary precedence levels.
fn binary_operator(kind: TokenKind) -> BinaryOperator {
    match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        _ => unreachable!("binary_operator used with non binary operator {kind:?}"),
    }
}
