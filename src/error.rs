/// Lexing and parsing errors.
///
/// Defines the errors raised while scanning and parsing source code. They are
/// reported through the diagnostic sink as soon as they occur; the values
/// themselves only travel far enough for the parser to resynchronize.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: type mismatches, undefined
/// variables and invalid calls, plus the internal output fault that is kept
/// apart from user-facing diagnostics.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::{EvalError, RuntimeError};
