use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::arithmetic::type_mismatch,
            core::{EvalResult, Interpreter},
        },
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values. Integers and floats compare by
    /// numeric value, so `1 == 1.0` holds; values of different kinds are never
    /// equal, and booleans are not numbers.
    ///
    /// Ordering operators accept two numbers or two strings. Strings compare
    /// lexicographically by code point. Integers and floats are ordered
    /// exactly, without converting the integer. A `NaN` operand makes every
    /// ordering false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` when ordering values that are neither both
    /// numbers nor both strings.
    ///
    /// # Example
    /// ```
    /// use pisc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Float(5.0);
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less, &a, &b);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Equal, &a, &Value::from("3"));
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => values_equal(left, right),
            NotEqual => !values_equal(left, right),
            Less | LessEqual | Greater | GreaterEqual => {
                let ordering = compare(op, left, right)?;
                match op {
                    Less => ordering == Some(Ordering::Less),
                    LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    Greater => ordering == Some(Ordering::Greater),
                    _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                }
            },
            _ => return Err(type_mismatch(op, left, right)),
        };

        Ok(Value::Bool(result))
    }
}

/// Structural equality with numeric comparison across integers and floats.
///
/// # Example
/// ```
/// use pisc::interpreter::{evaluator::binary::comparison::values_equal, value::Value};
///
/// assert!(values_equal(&Value::Integer(2), &Value::Float(2.0)));
/// assert!(!values_equal(&Value::Bool(true), &Value::Integer(1)));
/// assert!(values_equal(&Value::Null, &Value::Null));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(i), Value::Float(r)) | (Value::Float(r), Value::Integer(i)) => {
            compare_integer_float(*i, *r) == Some(Ordering::Equal)
        },
        _ => left == right,
    }
}

/// Orders an integer against a float without rounding the integer.
///
/// Returns `None` only when `r` is `NaN`.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use pisc::interpreter::evaluator::binary::comparison::compare_integer_float;
///
/// assert_eq!(compare_integer_float(10_000_000_000_000_001, 1e16), Some(Ordering::Greater));
/// assert_eq!(compare_integer_float(-3, -2.5), Some(Ordering::Less));
/// assert_eq!(compare_integer_float(i64::MAX, f64::INFINITY), Some(Ordering::Less));
/// assert_eq!(compare_integer_float(0, f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn compare_integer_float(i: i64, r: f64) -> Option<Ordering> {
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);

    if r.is_nan() {
        return None;
    }
    if r >= UPPER {
        return Some(Ordering::Less);
    }
    if r < LOWER {
        return Some(Ordering::Greater);
    }

    let whole = r.trunc();
    let ordering = i.cmp(&(whole as i64)).then_with(|| {
                                               let fraction = r - whole;
                                               if fraction > 0.0 {
                                                   Ordering::Less
                                               } else if fraction < 0.0 {
                                                   Ordering::Greater
                                               } else {
                                                   Ordering::Equal
                                               }
                                           });
    Some(ordering)
}

fn compare(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
        (Value::Float(a), Value::Float(b)) => Ok(a.partial_cmp(b)),
        (Value::Integer(i), Value::Float(r)) => Ok(compare_integer_float(*i, *r)),
        (Value::Float(r), Value::Integer(i)) => {
            Ok(compare_integer_float(*i, *r).map(Ordering::reverse))
        },
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => Err(type_mismatch(op, left, right)),
    }
}
