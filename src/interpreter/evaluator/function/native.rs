use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::RuntimeError,
    interpreter::value::{callable::NativeFunction, core::Value},
};

/// The native functions defined in every global scope.
pub const NATIVE_FUNCTIONS: &[NativeFunction] = &[NativeFunction { name:     "clock",
                                                                    arity:    0,
                                                                    function: clock, }];

/// Returns the wall-clock time in seconds since the Unix epoch.
///
/// The fractional part carries sub-second precision, so the difference of two
/// readings measures elapsed time.
///
/// # Errors
/// `NativeFailure` if the system clock reads earlier than the epoch.
///
/// # Example
/// ```
/// use treelox::interpreter::{evaluator::function::native::clock, value::core::Value};
///
/// let Value::Number(seconds) = clock(&[], 1).unwrap() else {
///     panic!("clock returns a number");
/// };
/// assert!(seconds > 0.0);
/// ```
pub fn clock(_args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    SystemTime::now().duration_since(UNIX_EPOCH)
                     .map(|elapsed| Value::Number(elapsed.as_secs_f64()))
                     .map_err(|error| RuntimeError::NativeFailure { name: "clock",
                                                                    details: error.to_string(),
                                                                    line })
}
