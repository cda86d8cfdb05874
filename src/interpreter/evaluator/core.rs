use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes programs and collects their printed output.
///
/// ## Usage
///
/// Each call to [`Interpreter::run`] starts from an empty environment and an
/// empty output sequence, so one interpreter can be reused for unrelated
/// programs without state leaking between them. The first runtime error
/// aborts the run; the values printed before it stay available through
/// [`Interpreter::output`].
#[derive(Debug, Default)]
pub struct Interpreter {
    env:    Environment,
    output: Vec<Value>,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a whole program.
    ///
    /// Statements execute in order against a fresh environment. Every `print`
    /// appends its value, with its runtime type intact, to the output.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// The printed values in program order.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. Output produced up to that
    /// point is kept and can be read with [`Interpreter::output`].
    ///
    /// # Example
    /// ```
    /// use pisc::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let program = pisc::parse("a = 5\nb = 3\na = a + b\nprint(a)").unwrap();
    /// let output = Interpreter::new().run(&program).unwrap();
    ///
    /// assert_eq!(output, vec![Value::Integer(8)]);
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<Vec<Value>> {
        self.env.clear();
        self.output.clear();

        self.exec_block(&program.statements)?;

        log::debug!("run finished: {} value(s) printed, {} variable(s) bound",
                    self.output.len(),
                    self.env.len());

        Ok(std::mem::take(&mut self.output))
    }

    /// Values printed by the last run that failed.
    ///
    /// After a successful [`Interpreter::run`] the output has been handed to
    /// the caller and this slice is empty.
    ///
    /// # Example
    /// ```
    /// use pisc::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let program = pisc::parse("print(1)\nprint(missing)").unwrap();
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert!(interpreter.run(&program).is_err());
    /// assert_eq!(interpreter.output(), &[Value::Integer(1)]);
    /// ```
    #[must_use]
    pub fn output(&self) -> &[Value] {
        &self.output
    }

    /// Read access to the variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Executes statements in order, stopping at the first error.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.exec_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// - `Assign` evaluates its expression and binds the result.
    /// - `Print` evaluates its expression and appends the result to the output.
    /// - `If` runs `then_branch` when the condition is truthy, else the
    ///   `else_branch` if present.
    /// - `While` re-evaluates its condition before every iteration.
    /// - `For` binds the loop variable to `0..count` in turn. The variable keeps
    ///   its last value after the loop.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` from the evaluated expressions or nested
    /// statements.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assign { name, expr } => {
                let value = self.eval(expr)?;
                self.env.set(name, value);
            },
            Statement::Print { expr } => {
                let value = self.eval(expr)?;
                log::trace!("print {value}");
                self.output.push(value);
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_block(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)?;
                }
            },
            Statement::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    self.exec_block(body)?;
                }
            },
            Statement::For { var, count, body } => {
                for i in 0..*count {
                    self.env.set(var, Value::Integer(i));
                    self.exec_block(body)?;
                }
            },
        }

        Ok(())
    }

    /// Evaluates an expression to a value.
    ///
    /// Both operands of a binary operation are evaluated, left first, before
    /// the operator is applied.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` for unbound names.
    /// - Any error raised by an operator, see [`Interpreter::eval_binary`] and
    ///   [`Interpreter::eval_unary`].
    ///
    /// # Example
    /// ```
    /// use pisc::{
    ///     ast::{BinaryOperator, Expr, Number},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: Number::Integer(7) }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Number { value: Number::Integer(2) }), };
    ///
    /// assert_eq!(Interpreter::new().eval(&expr).unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value } => Ok((*value).into()),
            Expr::Boolean { value } => Ok(Value::Bool(*value)),
            Expr::String { value } => Ok(Value::Str(value.clone())),
            Expr::Null {} => Ok(Value::Null),
            Expr::Variable { name } => self.env.get(name).cloned(),
            Expr::UnaryOp { op, operand } => {
                let operand = self.eval(operand)?;
                Self::eval_unary(*op, &operand)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
        }
    }
}
