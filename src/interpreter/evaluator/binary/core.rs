use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to `eval_arithmetic` and every
    /// comparison to `eval_comparison`. Operands are already evaluated; this
    /// function never touches the environment.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use pisc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let less = Interpreter::eval_binary(BinaryOperator::Less, &left, &right);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right)
            },
        }
    }
}
