use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::utils::number_operands, value::core::Value},
};

/// Evaluates an ordering comparison (`<`, `<=`, `>`, `>=`) on two numbers.
///
/// # Errors
/// `OperandsMustBeNumbers` unless both operands are numbers. Strings are not
/// ordered.
pub(super) fn eval_comparison(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(left, right, line)?;

    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::GreaterEqual => a >= b,
        _ => unreachable!("eval_comparison called with {op:?}"),
    };

    Ok(Value::Bool(result))
}

/// Evaluates `==` or `!=` using value equality.
///
/// Values of any kinds may be compared; different kinds are simply unequal.
#[must_use]
pub(super) fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let equal = left == right;

    Value::Bool(if op == BinaryOperator::NotEqual { !equal } else { equal })
}
