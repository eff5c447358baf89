//! Binary, relational and unary operator tables.
//!
//! Direct enum dispatch over the fixed value set. Strings absorb `+` before
//! any type check: `"n=" + 1` concatenates textual forms.

use std::cmp::Ordering;

use flow_ir::{BinaryOp, RelOp};

use crate::errors::{
    division_by_zero, integer_overflow, invalid_operator, modulo_by_zero, null_conversion,
    type_mismatch,
};
use crate::value::Value;
use crate::EvalResult;

// Helper functions for repetitive checked arithmetic patterns

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
#[inline]
fn checked_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Checked modulo with zero guard.
#[inline]
fn checked_mod(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(modulo_by_zero())
    } else {
        checked_arith(a.checked_rem(b), "remainder")
    }
}

/// Evaluate `left op right`.
///
/// A `String` on either side only supports `+`. Otherwise both operands must
/// share a type, and only `Int` and `Double` have arithmetic.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return match op {
            BinaryOp::Add => Ok(Value::Str(format!("{left}{right}"))),
            _ => Err(invalid_operator(op.as_symbol(), "String")),
        };
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Double(a), Value::Double(b)) => Ok(Value::Double(eval_double_binary(*a, *b, op))),
        _ if left.type_name() == right.type_name() => {
            Err(invalid_operator(op.as_symbol(), left.type_name()))
        }
        _ => Err(type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Integer operations. Division and remainder truncate toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(a, b),
        BinaryOp::Mod => checked_mod(a, b),
    }
}

/// IEEE 754 operations; division by zero yields an infinity or NaN.
fn eval_double_binary(a: f64, b: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
    }
}

/// Evaluate `left op right` to a boolean.
///
/// Both operands must have the same type. Equality works on every type
/// (objects by identity); ordering only on numbers, strings and chars.
pub fn evaluate_comparison(left: &Value, right: &Value, op: RelOp) -> Result<bool, crate::EvalError> {
    if left.type_name() != right.type_name() {
        return Err(type_mismatch(left.type_name(), right.type_name()));
    }

    match op {
        RelOp::Eq => return Ok(left == right),
        RelOp::NotEq => return Ok(left != right),
        RelOp::Lt | RelOp::Gt | RelOp::LtEq | RelOp::GtEq => {}
    }

    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        // NaN is unordered: every ordering test is false
        (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
        _ => return Err(invalid_operator(op.as_symbol(), left.type_name())),
    };

    Ok(matches!(
        (op, ordering),
        (RelOp::Lt, Some(Ordering::Less))
            | (RelOp::Gt, Some(Ordering::Greater))
            | (RelOp::LtEq, Some(Ordering::Less | Ordering::Equal))
            | (RelOp::GtEq, Some(Ordering::Greater | Ordering::Equal))
    ))
}

/// Unary minus.
pub fn evaluate_negate(value: &Value) -> EvalResult {
    match value {
        Value::Int(n) => checked_arith(n.checked_neg(), "negation"),
        Value::Double(d) => Ok(Value::Double(-d)),
        other => Err(invalid_operator("-", other.type_name())),
    }
}

/// `toString(value)`; `Unit` has no textual form to convert.
pub fn to_string_value(value: &Value) -> EvalResult {
    match value {
        Value::Unit => Err(null_conversion()),
        Value::Str(s) => Ok(Value::Str(s.clone())),
        other => Ok(Value::Str(other.to_string())),
    }
}

#[cfg(test)]
mod tests;
