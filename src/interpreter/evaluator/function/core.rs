use std::{cell::RefCell, io::Write, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDecl},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::check_arity,
        },
        value::{
            callable::{Callable, UserFunction},
            core::Value,
        },
    },
};

impl<W: Write> Interpreter<W> {
    /// Binds a declared function in the current scope.
    ///
    /// The function captures the current scope as its closure, so it sees the
    /// bindings of the block it was declared in even after that block exits.
    pub fn define_function(&mut self, declaration: &Rc<FunctionDecl>) {
        debug!(name = %declaration.name,
               arity = declaration.params.len(),
               line = declaration.line,
               "function defined");

        let function = UserFunction { declaration: Rc::clone(declaration),
                                      closure:     Rc::clone(&self.environment), };
        self.environment
            .borrow_mut()
            .define(&declaration.name, Value::from(Callable::Function(function)));
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to right.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line of the closing parenthesis, used for errors.
    ///
    /// # Returns
    /// The value returned by the callee. User functions return `nil`.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   callee's arity.
    /// - Any error raised while running the callee.
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize)
                     -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::NotCallable { line }.into());
        };
        check_arity(callable.arity(), arguments.len(), line)?;

        trace!(name = callable.name(), line, "call");
        match callable.as_ref() {
            Callable::Native(native) => Ok((native.function)(&arguments, line)?),
            Callable::Function(function) => self.call_function(function, arguments),
        }
    }

    /// Runs a user function with already checked arguments.
    ///
    /// Parameters are bound in a new scope whose parent is the function's
    /// closure, not the caller's scope.
    fn call_function(&mut self,
                     function: &UserFunction,
                     arguments: Vec<Value>)
                     -> EvalResult<Value> {
        let mut scope = Environment::with_parent(Rc::clone(&function.closure));
        for (param, argument) in function.declaration.params.iter().zip(arguments) {
            scope.define(param, argument);
        }

        self.execute_block(&function.declaration.body, Rc::new(RefCell::new(scope)))?;

        Ok(Value::Nil)
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
        assert!(!report.had_error, "{:?}", report.messages());
        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.interpret(&statements, &mut report).unwrap();

        (String::from_utf8(interpreter.into_output()).unwrap(), report.messages())
    }

    #[test]
    fn calls_user_functions() {
        let (output, errors) = run("fun greet(name) { print \"hi \" + name; } greet(\"lox\");");

        assert!(errors.is_empty());
        assert_eq!(output, "hi lox\n");
    }

    #[test]
    fn calls_return_nil() {
        let (output, _) = run("fun f() {} print f();");

        assert_eq!(output, "nil\n");
    }

    #[test]
    fn functions_print_their_name() {
        let (output, _) = run("fun f() {} print f; print clock;");

        assert_eq!(output, "<fn f>\n<native fn clock>\n");
    }

    #[test]
    fn closures_see_their_defining_scope() {
        let source = "var x = \"global\";
                      fun outer() {
                        var x = \"local\";
                        fun inner() { print x; }
                        inner();
                      }
                      outer();
                      fun show() { print x; }
                      { var x = \"shadow\"; show(); }";
        let (output, _) = run(source);

        assert_eq!(output, "local\nglobal\n");
    }

    #[test]
    fn parameters_are_local_to_the_call() {
        let (output, errors) = run("var a = \"outer\"; fun f(a) { a = a + 1; print a; } f(1); print a;");

        assert!(errors.is_empty());
        assert_eq!(output, "2\nouter\n");
    }

    #[test]
    fn recursion_sees_the_function() {
        let (output, _) = run("fun count(n) { if (n > 0) { print n; count(n - 1); } } count(3);");

        assert_eq!(output, "3\n2\n1\n");
    }

    #[test]
    fn calling_a_non_function_fails() {
        let (_, errors) = run("\"not a function\"();");

        assert_eq!(errors, vec!["[line 1] Runtime error: Can only call functions and classes."]);
    }

    #[test]
    fn arity_is_checked_against_the_declaration() {
        let (output, errors) = run("fun add(a, b) { print a + b; }\nadd(1, 2, 3);\nprint \"after\";");

        assert_eq!(output, "");
        assert_eq!(errors, vec!["[line 2] Runtime error: Expected 2 arguments but got 3."]);
    }

    #[test]
    fn arguments_are_evaluated_before_the_callee_is_checked() {
        let (_, errors) = run("nil(missing);");

        assert_eq!(errors, vec!["[line 1] Runtime error: Undefined variable 'missing'."]);
    }

    #[test]
    fn clock_takes_no_arguments() {
        let (output, errors) = run("print clock() > 0; clock(1);");

        assert_eq!(output, "true\n");
        assert_eq!(errors, vec!["[line 1] Runtime error: Expected 0 arguments but got 1."]);
    }
}
