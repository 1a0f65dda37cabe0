use thiserror::Error;

/// Represents all user-facing errors that can occur during evaluation.
///
/// Each variant carries the line of the operator, identifier or call whose
/// operation failed. The `Display` output is the bare message; the line is
/// added by the diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read or assignment of a name that no enclosing scope defines.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator received a non-number.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or comparison operator received a non-number.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Operands must be two numbers or two strings.")]
    InvalidAdditionOperands {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not callable.
    #[error("Can only call functions and classes.")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Expected {expected} arguments but got {found}.")]
    ArgumentCountMismatch {
        /// The declared arity of the callee.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A native function could not produce its result.
    #[error("Native function '{name}' failed: {details}.")]
    NativeFailure {
        /// The name of the native function.
        name:    &'static str,
        /// Why it failed.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the line number of the failed operation.
    ///
    /// ## Example
    /// ```
    /// use treelox::error::RuntimeError;
    ///
    /// let error = RuntimeError::NotCallable { line: 3 };
    ///
    /// assert_eq!(error.line(), 3);
    /// assert_eq!(error.to_string(), "Can only call functions and classes.");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::InvalidAdditionOperands { line }
            | Self::NotCallable { line }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::NativeFailure { line, .. } => *line,
        }
    }
}

/// Everything that can abort an evaluation.
///
/// `Runtime` errors are user-facing and end up in the diagnostic sink.
/// `Output` is an implementation-level fault (the program's output could not
/// be written) and is propagated to the caller of `interpret` untouched.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A runtime error in the interpreted program.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing program output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
