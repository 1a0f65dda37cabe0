use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::FunctionDecl,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Signature of a native function body.
///
/// Receives the already evaluated arguments and the line of the call.
pub type NativeFn = fn(&[Value], usize) -> Result<Value, RuntimeError>;

/// A function implemented in Rust and installed in the global scope.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    /// The global name the function is bound to.
    pub name:     &'static str,
    /// The exact number of arguments the function takes.
    pub arity:    usize,
    /// The function body.
    pub function: NativeFn,
}

/// A function declared in the program.
///
/// The closure is the environment that was current when the declaration
/// executed. Calls run in a fresh scope whose parent is that environment,
/// never the caller's.
#[derive(Clone)]
pub struct UserFunction {
    /// The declaration shared with the syntax tree.
    pub declaration: Rc<FunctionDecl>,
    /// The defining environment.
    pub closure:     Rc<RefCell<Environment>>,
}

/// Anything that can be called with `(...)`.
#[derive(Clone)]
pub enum Callable {
    /// A native function such as `clock`.
    Native(NativeFunction),
    /// A user-defined function with its closure.
    Function(UserFunction),
}

impl Callable {
    /// The number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native(native) => native.arity,
            Self::Function(function) => function.declaration.params.len(),
        }
    }

    /// The name the callable was declared with.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => native.name,
            Self::Function(function) => &function.declaration.name,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "<native fn {}>", native.name),
            Self::Function(function) => write!(f, "<fn {}>", function.declaration.name),
        }
    }
}

// The closure environment can hold the function itself, so it is not printed.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Native(_) => "Native",
            Self::Function(_) => "Function",
        };
        f.debug_struct(kind)
         .field("name", &self.name())
         .field("arity", &self.arity())
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn answer(_: &[Value], _: usize) -> Result<Value, RuntimeError> {
        Ok(Value::Number(42.0))
    }

    #[test]
    fn describes_native_functions() {
        let native = Callable::Native(NativeFunction { name:     "answer",
                                                       arity:    0,
                                                       function: answer, });

        assert_eq!(native.to_string(), "<native fn answer>");
        assert_eq!(native.arity(), 0);
        assert_eq!(format!("{native:?}"), "Native { name: \"answer\", arity: 0, .. }");
    }

    #[test]
    fn describes_user_functions() {
        let declaration = FunctionDecl { name:   "add".to_string(),
                                         params: vec!["a".to_string(), "b".to_string()],
                                         body:   Vec::new(),
                                         line:   1, };
        let function = Callable::Function(UserFunction { declaration: Rc::new(declaration),
                                                         closure:     Rc::default(), });

        assert_eq!(function.to_string(), "<fn add>");
        assert_eq!(function.name(), "add");
        assert_eq!(function.arity(), 2);
    }

    #[test]
    fn callables_are_equal_only_to_themselves() {
        let native = NativeFunction { name:     "answer",
                                      arity:    0,
                                      function: answer, };
        let first = Value::from(Callable::Native(native));
        let second = Value::from(Callable::Native(native));

        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
