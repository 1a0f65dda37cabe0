/// Interpreter state and expression evaluation.
///
/// Holds the global and current environments and the output sink, and
/// converts runtime errors into diagnostics at the top of `interpret`.
pub mod core;

/// Statement execution.
///
/// Implements `print`, variable and function declarations, conditionals and
/// loops.
pub mod statement;

/// Block execution.
///
/// Runs a statement list in a given scope and restores the previous scope on
/// every exit path.
pub mod block;

/// Unary operator evaluation.
///
/// Numeric negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Arithmetic, string concatenation, comparisons, equality and the
/// short-circuiting logical operators.
pub mod binary;

/// Function values and calls.
///
/// Function declaration, argument checking, user function invocation and the
/// native functions installed in the global scope.
pub mod function;

/// Operand checks shared by the operator evaluators.
pub mod utils;
