use std::{
    cell::RefCell,
    io::{self, Stdout, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::eval_binary, function::native::NATIVE_FUNCTIONS, unary::eval_unary},
        value::{callable::Callable, core::Value},
    },
    report::Reporter,
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a `T` or aborts with an [`EvalError`]: a runtime
/// error in the program, or a failure to write its output.
pub type EvalResult<T> = Result<T, EvalError>;

/// The tree-walking interpreter.
///
/// One interpreter holds one global scope, so consecutive calls to
/// [`Interpreter::interpret`] share their global bindings. `print` writes to
/// `W`; [`Interpreter::new`] uses standard output.
pub struct Interpreter<W = Stdout> {
    /// The outermost scope. Native functions live here.
    pub(super) globals:     Rc<RefCell<Environment>>,
    /// The innermost scope of the code being executed.
    pub(super) environment: Rc<RefCell<Environment>>,
    pub(super) output:      W,
}

impl Interpreter<Stdout> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `output`.
    ///
    /// The global scope starts out holding the native functions.
    pub fn with_output(output: W) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));
        for native in NATIVE_FUNCTIONS {
            globals.borrow_mut()
                   .define(native.name, Value::from(Callable::Native(*native)));
        }

        Self { environment: Rc::clone(&globals),
               globals,
               output }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads a global binding, if there is one.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(name, 0).ok()
    }

    /// Executes statements in order.
    ///
    /// The first runtime error stops execution: it is reported through
    /// `reporter` and the remaining statements are skipped. Bindings made
    /// before the error stay in place.
    ///
    /// # Errors
    /// Returns the I/O error if program output cannot be written. Such a
    /// failure is not a diagnostic and is never reported.
    ///
    /// ## Example
    /// ```
    /// use treelox::{
    ///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
    ///     report::ErrorReport,
    /// };
    ///
    /// let mut report = ErrorReport::silent();
    /// let tokens = scan("print 1 + 2 * 3; print nil; x = 5; print \"unreached\";", &mut report);
    /// let statements = parse(&tokens, &mut report);
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::new());
    /// interpreter.interpret(&statements, &mut report).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"7\nnil\n");
    /// assert_eq!(report.messages(),
    ///            vec!["[line 1] Runtime error: Undefined variable 'x'.".to_string()]);
    /// ```
    pub fn interpret(&mut self,
                     statements: &[Stmt],
                     reporter: &mut dyn Reporter)
                     -> io::Result<()> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {},
                Err(EvalError::Runtime(error)) => {
                    debug!(line = error.line(), %error, "runtime error, stopping");
                    reporter.report_runtime_error(error.line(), &error.to_string());
                    break;
                },
                Err(EvalError::Output(error)) => return Err(error),
            }
        }

        self.output.flush()
    }

    /// Evaluates an expression to a value.
    ///
    /// Operands are evaluated left to right before their operator applies.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { expression } => self.evaluate(expression),
            Expr::Variable { name, line } => Ok(self.environment.borrow().get(name, *line)?),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment
                    .borrow_mut()
                    .assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::Unary { op, right, line } => {
                let right = self.evaluate(right)?;
                Ok(eval_unary(*op, &right, *line)?)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(eval_binary(*op, &left, &right, *line)?)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        }
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

    /// Runs `source` on `interpreter`, returning the diagnostics it produced.
    fn run_on(interpreter: &mut Interpreter<Vec<u8>>, source: &str) -> Vec<String> {
        let mut report = ErrorReport::silent();
        let tokens = scan(source, &mut report);
        let statements = parse(&tokens, &mut report);
        assert!(!report.had_error, "{:?}", report.messages());

        interpreter.interpret(&statements, &mut report).unwrap();
        report.messages()
    }

    fn run(source: &str) -> (String, Vec<String>) {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let errors = run_on(&mut interpreter, source);

        (String::from_utf8(interpreter.into_output()).unwrap(), errors)
    }

    #[test]
    fn prints_arithmetic() {
        assert_eq!(run("print 1 + 2 * 3;"), ("7\n".to_string(), vec![]));
    }

    #[test]
    fn block_shadowing_does_not_leak() {
        let (output, _) = run("var a = 1; { var a = 2; print a; } print a;");

        assert_eq!(output, "2\n1\n");
    }

    #[test]
    fn assignment_reaches_enclosing_scopes() {
        let (output, _) = run("var a = 1; { a = a + 1; { a = a * 10; } } print a;");

        assert_eq!(output, "20\n");
    }

    #[test]
    fn assignment_is_an_expression() {
        let (output, _) = run("var a; var b; a = b = 3; print a; print b;");

        assert_eq!(output, "3\n3\n");
    }

    #[test]
    fn undefined_assignment_halts_the_run() {
        let (output, errors) = run("print 1;\nx = 5;\nprint 2;");

        assert_eq!(output, "1\n");
        assert_eq!(errors, vec!["[line 2] Runtime error: Undefined variable 'x'."]);
    }

    #[test]
    fn scope_is_restored_after_a_runtime_error() {
        let mut interpreter = Interpreter::with_output(Vec::new());

        let errors = run_on(&mut interpreter,
                            "var a = \"outer\"; { var a = \"inner\"; a - 1; }");
        assert_eq!(errors, vec!["[line 1] Runtime error: Operands must be numbers."]);

        let errors = run_on(&mut interpreter, "print a;");
        assert!(errors.is_empty());
        assert_eq!(interpreter.output(), b"outer\n");
    }

    #[test]
    fn globals_persist_between_runs() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        run_on(&mut interpreter, "var count = 1;");
        run_on(&mut interpreter, "count = count + 1;");

        assert_eq!(interpreter.global("count"), Some(Value::Number(2.0)));
        assert_eq!(interpreter.global("missing"), None);
    }

    #[test]
    fn output_failures_are_not_diagnostics() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut report = ErrorReport::silent();
        let statements = parse(&scan("print 1;", &mut report), &mut report);
        let mut interpreter = Interpreter::with_output(ClosedPipe);

        let error = interpreter.interpret(&statements, &mut report).unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(report.diagnostics().is_empty());
        assert!(!report.had_runtime_error);
    }
}
