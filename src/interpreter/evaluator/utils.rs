use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Extracts the number a unary operator works on.
///
/// # Errors
/// `OperandMustBeNumber` if `value` is not a number.
pub fn number_operand(value: &Value, line: usize) -> Result<f64, RuntimeError> {
    value.as_number()
         .ok_or(RuntimeError::OperandMustBeNumber { line })
}

/// Extracts the numbers a binary operator works on.
///
/// # Errors
/// `OperandsMustBeNumbers` unless both values are numbers.
pub fn number_operands(left: &Value, right: &Value, line: usize) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}

/// Checks that a call supplies exactly the number of arguments its callee
/// declares.
///
/// # Errors
/// `ArgumentCountMismatch` with the declared count first.
///
/// # Example
/// ```
/// use treelox::{error::RuntimeError, interpreter::evaluator::utils::check_arity};
///
/// assert!(check_arity(2, 2, 1).is_ok());
/// assert_eq!(check_arity(2, 3, 1).unwrap_err().to_string(),
///            "Expected 2 arguments but got 3.");
/// ```
pub fn check_arity(expected: usize, found: usize, line: usize) -> Result<(), RuntimeError> {
    if expected == found {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { expected,
                                                  found,
                                                  line })
    }
}
