use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation on two values.
///
/// Semantics by operator:
/// - `+` adds two integers, or concatenates when either operand is text
///   (integers are rendered in decimal first).
/// - `-`, `*`, `/`, `%` are integer-only; `/` and `%` reject a zero divisor.
/// - Comparisons yield the integer `1` when the relation holds and `0`
///   otherwise. Two text values compare byte-wise; two integers compare
///   numerically; mixing the types is an error.
///
/// All integer arithmetic is checked.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`, `right`: The already-evaluated operands.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed [`Value`].
///
/// # Errors
/// Returns `TypeError`, `DivisionByZero`, or `Overflow` as described above.
///
/// # Example
/// ```
/// use ggscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add,
///                       &Value::Integer(2),
///                       &Value::Integer(3),
///                       1).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let glued = eval_binary(BinaryOperator::Add,
///                         &Value::from("x"),
///                         &Value::Integer(5),
///                         1).unwrap();
/// assert_eq!(glued, Value::from("x5"));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => add_or_concat(left, right, line),
        BinaryOperator::Sub => arithmetic(left, right, op, line, i64::checked_sub),
        BinaryOperator::Mul => arithmetic(left, right, op, line, i64::checked_mul),
        BinaryOperator::Div => division(left, right, op, line, i64::checked_div),
        BinaryOperator::Mod => division(left, right, op, line, i64::checked_rem),
        BinaryOperator::Equal => comparison(left, right, line, |ord| ord == Ordering::Equal),
        BinaryOperator::NotEqual => comparison(left, right, line, |ord| ord != Ordering::Equal),
        BinaryOperator::Less => comparison(left, right, line, |ord| ord == Ordering::Less),
        BinaryOperator::Greater => comparison(left, right, line, |ord| ord == Ordering::Greater),
        BinaryOperator::LessEqual => comparison(left, right, line, |ord| ord != Ordering::Greater),
        BinaryOperator::GreaterEqual => comparison(left, right, line, |ord| ord != Ordering::Less),
    }
}

/// Adds two integers or concatenates when either operand is text.
fn add_or_concat(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => {
            l.checked_add(*r)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        _ => Ok(Value::Text(format!("{left}{right}"))),
    }
}

/// Extracts integer operands or reports which types the operator rejected.
fn integer_operands(left: &Value,
                    right: &Value,
                    op: BinaryOperator,
                    line: usize)
                    -> EvalResult<(i64, i64)> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError::TypeError { details: format!("Operator '{op}' is not defined for {} and {}",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line }),
    }
}

/// Applies a checked integer operation to two integer operands.
fn arithmetic(left: &Value,
              right: &Value,
              op: BinaryOperator,
              line: usize,
              apply: fn(i64, i64) -> Option<i64>)
              -> EvalResult<Value> {
    let (l, r) = integer_operands(left, right, op, line)?;
    apply(l, r).map(Value::Integer)
               .ok_or(RuntimeError::Overflow { line })
}

/// Like [`arithmetic`], but rejects a zero divisor first.
fn division(left: &Value,
            right: &Value,
            op: BinaryOperator,
            line: usize,
            apply: fn(i64, i64) -> Option<i64>)
            -> EvalResult<Value> {
    let (l, r) = integer_operands(left, right, op, line)?;
    if r == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    apply(l, r).map(Value::Integer)
               .ok_or(RuntimeError::Overflow { line })
}

/// Orders the operands and renders the relation's truth as `0` or `1`.
///
/// Two text values compare byte-wise, two integers numerically; any other
/// pairing is a type error.
fn comparison(left: &Value,
              right: &Value,
              line: usize,
              holds: fn(Ordering) -> bool)
              -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => l.cmp(r),
        (Value::Text(l), Value::Text(r)) => l.as_bytes().cmp(r.as_bytes()),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("Cannot compare {} to {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        },
    };

    Ok(Value::Integer(i64::from(holds(ordering))))
}
