use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{
            arithmetic::{eval_addition, eval_arithmetic},
            comparison::{eval_comparison, eval_equality},
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// This function routes the operation to specialized handlers depending on
/// the operator. `+` adds numbers or concatenates strings. The other
/// arithmetic operators and the ordering comparisons require numbers.
/// Equality never fails.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The resulting value.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let left = Value::Number(3.0);
/// let right = Value::Number(4.0);
///
/// let result = eval_binary(BinaryOperator::Add, &left, &right, 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Less, &left, &Value::from("4"), 1);
/// assert_eq!(result.unwrap_err().to_string(), "Operands must be numbers.");
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> Result<Value, RuntimeError> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => eval_addition(left, right, line),
        Sub | Mul | Div => eval_arithmetic(op, left, right, line),
        Less | LessEqual | Greater | GreaterEqual => eval_comparison(op, left, right, line),
        Equal | NotEqual => Ok(eval_equality(op, left, right)),
    }
}
