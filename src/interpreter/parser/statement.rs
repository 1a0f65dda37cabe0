use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a single declaration, recovering from syntax errors.
    ///
    /// A declaration may be one of:
    /// - a variable declaration (`var`),
    /// - a function declaration (`fun`),
    /// - any other statement.
    ///
    /// On a syntax error the parser skips to the next statement boundary and
    /// `None` is returned; the error has already been reported.
    pub fn declaration(&mut self) -> Option<Stmt> {
        ensure_sufficient_stack(|| self.declaration_inner())
    }

    fn declaration_inner(&mut self) -> Option<Stmt> {
        let result = if self.match_any(&[TokenKind::Var]) {
            self.var_declaration()
        } else if self.match_any(&[TokenKind::Fun]) {
            self.function_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(_) => {
                self.synchronize();
                None
            },
        }
    }

    /// Parses the rest of a variable declaration after `var`.
    ///
    /// Grammar: `var_decl := "var" IDENT ("=" expression)? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

        Ok(Stmt::Var { name: name.lexeme,
                       initializer,
                       line: name.line })
    }

    /// Parses the rest of a function declaration after `fun`.
    ///
    /// Grammar: `fun_decl := "fun" IDENT "(" params? ")" block`
    fn function_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let params = self.parse_comma_separated("parameters", |parser| {
                             parser.consume(TokenKind::Identifier, "Expect parameter name.")
                                   .map(|token| token.lexeme)
                         })?;
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name: name.lexeme,
                                                 params,
                                                 body,
                                                 line: name.line })))
    }

    /// Parses a statement.
    ///
    /// Grammar:
    /// ```text
    /// statement := print_stmt | if_stmt | while_stmt | for_stmt | block | expr_stmt
    /// ```
    pub fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_any(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_any(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block { statements: self.block()? });
        }

        self.expression_statement()
    }

    /// Grammar: `print_stmt := "print" expression ";"`
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;

        Ok(Stmt::Print { expr })
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// Grammar: `if_stmt := "if" "(" expression ")" statement ("else" statement)?`
    ///
    /// An `else` binds to the nearest preceding `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_any(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition,
                      then_branch,
                      else_branch })
    }

    /// Grammar: `while_stmt := "while" "(" expression ")" statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;

        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Parses a `for` loop and desugars it into a `while` loop.
    ///
    /// Syntax:
    /// ```text
    ///     for (initializer; condition; increment) body
    /// ```
    /// becomes
    /// ```text
    ///     { initializer; while (condition) { body; increment; } }
    /// ```
    /// Every clause is optional. A missing condition is the literal `true`.
    /// The user body is always wrapped in an inner block, even without an
    /// increment.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.match_any(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = vec![self.statement()?];
        if let Some(expr) = increment {
            body.push(Stmt::Expression { expr });
        }

        let condition = condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true) });
        let mut statements: Vec<Stmt> = initializer.into_iter().collect();
        statements.push(Stmt::While { condition,
                                      body: Box::new(Stmt::Block { statements: body }) });

        Ok(Stmt::Block { statements })
    }

    /// Grammar: `expr_stmt := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;

        Ok(Stmt::Expression { expr })
    }
}
