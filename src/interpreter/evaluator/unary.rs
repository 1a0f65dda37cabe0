use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::utils::number_operand, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. The operand must be a number.
/// - `Not`: negation of the operand's truthiness. Never fails.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed `Value`.
///
/// # Example
/// ```
/// use treelox::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// // Negation
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// // Logical not
/// let v = eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> Result<Value, RuntimeError> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-number_operand(value, line)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
