use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// Typing rules:
    /// - two integers stay integers for `+`, `-` and `*`, with overflow
    ///   reported instead of wrapping;
    /// - any other pair of numbers is computed in `f64`;
    /// - `/` always produces a float. Two integers are divided as the nearest
    ///   floats, so large integers divide without error;
    /// - `+` on two strings concatenates them.
    ///
    /// Every other combination, booleans and `null` included, is a type
    /// mismatch. A zero divisor is checked before the operand types, so
    /// `x / 0` fails with division by zero whatever `x` is.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when dividing by `0` or `0.0`.
    /// - `RuntimeError::Overflow` when integer arithmetic leaves `i64`.
    /// - `RuntimeError::IntegerTooLarge` when an integer meets a float operand
    ///   but cannot be represented exactly.
    /// - `RuntimeError::TypeMismatch` for unsupported operand kinds.
    ///
    /// # Example
    /// ```
    /// use pisc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let half = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                         &Value::Integer(1),
    ///                                         &Value::Integer(2));
    /// assert_eq!(half.unwrap(), Value::Float(0.5));
    ///
    /// let joined = Interpreter::eval_arithmetic(BinaryOperator::Add,
    ///                                           &Value::from("foo"),
    ///                                           &Value::from("bar"));
    /// assert_eq!(joined.unwrap(), Value::from("foobar"));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div};
        use Value::{Float, Integer, Str};

        if op == Div && is_zero(right) {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Integer(a), Integer(b)) if op == Div => Ok(Float(integer_division(*a, *b))),
            (Integer(a), Integer(b)) => integer_op(op, *a, *b),
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
            _ if left.is_number() && right.is_number() => {
                let (Some(l), Some(r)) = (left.as_float()?, right.as_float()?) else {
                    return Err(type_mismatch(op, left, right));
                };
                float_op(op, l, r).map(Float)
            },
            _ => Err(type_mismatch(op, left, right)),
        }
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Integer(n) => *n == 0,
        Value::Float(r) => *r == 0.0,
        _ => false,
    }
}

#[allow(clippy::cast_precision_loss)]
fn integer_division(a: i64, b: i64) -> f64 {
    a as f64 / b as f64
}

fn integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        _ => return Err(type_mismatch(op, &Value::Integer(a), &Value::Integer(b))),
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { op: op.symbol() })
}

fn float_op(op: BinaryOperator, l: f64, r: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(l + r),
        BinaryOperator::Sub => Ok(l - r),
        BinaryOperator::Mul => Ok(l * r),
        BinaryOperator::Div => Ok(l / r),
        _ => Err(type_mismatch(op, &Value::Float(l), &Value::Float(r))),
    }
}

pub(super) const fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch { op,
                                 left: left.kind_name(),
                                 right: right.kind_name() }
}
