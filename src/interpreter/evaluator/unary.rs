use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign of integers and floats. Integer negation is
    /// checked, so `-(i64::MIN)` is an overflow rather than a wrap.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `RuntimeError::Overflow` if the integer cannot be negated.
    /// - `RuntimeError::UnaryTypeMismatch` for non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use pisc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let err = Interpreter::eval_unary(UnaryOperator::Negate, &Value::from("a")).unwrap_err();
    /// assert_eq!(err.to_string(), "Bad operand type for unary -: string");
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { op: op.symbol() })
            },
            (UnaryOperator::Negate, Value::Float(r)) => Ok(Value::Float(-r)),
            (UnaryOperator::Negate, _) => {
                Err(RuntimeError::UnaryTypeMismatch { op,
                                                      operand: value.kind_name() })
            },
        }
    }
}
