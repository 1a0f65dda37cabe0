use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `and` or `or` with short-circuiting.
    ///
    /// The left operand is evaluated first. `and` returns it if it is falsy
    /// and `or` returns it if it is truthy; otherwise the right operand is
    /// evaluated and returned. The result is an operand value, not
    /// necessarily a boolean.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let short_circuits = match op {
            LogicalOperator::And => !left.is_truthy(),
            LogicalOperator::Or => left.is_truthy(),
        };

        if short_circuits { Ok(left) } else { self.evaluate(right) }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
        report::ErrorReport,
    };

    fn run(source: &str) -> (String, Vec<String>) {
        let mut report = ErrorReport::silent();
        let statements = parse(&scan(source, &mut report), &mut report);
        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.interpret(&statements, &mut report).unwrap();

        (String::from_utf8(interpreter.into_output()).unwrap(), report.messages())
    }

    #[test]
    fn right_operand_is_skipped_when_decided() {
        let (output, errors) = run("false and undefined; true or undefined; print \"ok\";");

        assert!(errors.is_empty());
        assert_eq!(output, "ok\n");
    }

    #[test]
    fn returns_operand_values() {
        let (output, _) = run("print nil or \"default\"; print 1 and 2; print false and 1; print 0 or 2;");

        assert_eq!(output, "default\n2\nfalse\n0\n");
    }

    #[test]
    fn right_operand_is_evaluated_otherwise() {
        let (_, errors) = run("true and missing;");

        assert_eq!(errors, vec!["[line 1] Runtime error: Undefined variable 'missing'."]);
    }
}
