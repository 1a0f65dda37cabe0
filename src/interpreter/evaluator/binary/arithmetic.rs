use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::utils::number_operands, value::core::Value},
};

/// Evaluates `+`.
///
/// Two numbers are added and two strings are concatenated. Any other pairing
/// fails; there is no implicit conversion.
///
/// # Errors
/// `InvalidAdditionOperands` for mixed or non-addable operands.
pub(super) fn eval_addition(left: &Value, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(RuntimeError::InvalidAdditionOperands { line }),
    }
}

/// Evaluates `-`, `*` and `/` on two numbers.
///
/// Division follows IEEE-754: dividing by zero yields an infinity or `NaN`
/// rather than an error.
///
/// # Errors
/// `OperandsMustBeNumbers` unless both operands are numbers.
pub(super) fn eval_arithmetic(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(left, right, line)?;

    let result = match op {
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        _ => unreachable!("eval_arithmetic called with {op:?}"),
    };

    Ok(Value::Number(result))
}
