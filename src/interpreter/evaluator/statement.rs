use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    ast::{Expr, Stmt},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// - `print` writes the value followed by a newline.
    /// - `var` binds the initializer's value, or `nil`, in the current scope.
    /// - A block runs in a fresh scope nested in the current one.
    /// - `if` and `while` test their condition for truthiness.
    /// - `fun` binds a function that closes over the current scope.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
            },
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                writeln!(self.output, "{value}")?;
            },
            Stmt::Var { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name, value);
            },
            Stmt::Block { statements } => {
                let scope = Environment::with_parent(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(scope)))?;
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            },
            Stmt::While { condition, body } => self.execute_while(condition, body)?,
            Stmt::Function(declaration) => self.define_function(declaration),
        }

        Ok(())
    }

    fn execute_while(&mut self, condition: &Expr, body: &Stmt) -> EvalResult<()> {
        while self.evaluate(condition)?.is_truthy() {
            self.execute(body)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        interpreter::{lexer::scan, parser::core::parse},
        report::ErrorReport,
    };

    fn output_of(source: &str) -> String {
        let mut report = ErrorReport::silent();
        let statements = parse(&scan(source, &mut report), &mut report);
        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.interpret(&statements, &mut report).unwrap();
        assert!(report.diagnostics().is_empty(), "{:?}", report.messages());

        String::from_utf8(interpreter.into_output()).unwrap()
    }

    #[test]
    fn uninitialized_variables_are_nil() {
        assert_eq!(output_of("var a; print a;"), "nil\n");
    }

    #[test]
    fn redeclaring_in_the_same_scope_replaces() {
        assert_eq!(output_of("var a = 1; var a = a + 1; print a;"), "2\n");
    }

    #[test]
    fn if_uses_truthiness() {
        assert_eq!(output_of("if (0) print \"zero\"; if (\"\") print \"empty\"; if (nil) print 1; else print 2;"),
                   "zero\nempty\n2\n");
    }

    #[test]
    fn while_loops_until_falsy() {
        assert_eq!(output_of("var i = 0; while (i < 3) { print i; i = i + 1; }"), "0\n1\n2\n");
    }

    #[test]
    fn for_leaves_the_last_value_assigned_in_the_body() {
        assert_eq!(output_of("var result; for (var i = 0; i < 5; i = i + 1) { result = i; } print result;"),
                   "4\n");
    }

    #[test]
    fn for_loop_variable_is_scoped_to_the_loop() {
        assert_eq!(output_of("var i = \"outer\"; for (var i = 0; i < 2; i = i + 1) {} print i;"),
                   "outer\n");
    }
}
