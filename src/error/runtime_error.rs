use thiserror::Error;

use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Read a variable that was never assigned.
    #[error("Variable '{name}' not defined")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// A binary operator was applied to operand kinds it does not support.
    #[error("Unsupported operand types for {op}: {left} and {right}")]
    TypeMismatch {
        /// The operator.
        op:    BinaryOperator,
        /// Kind name of the left operand.
        left:  &'static str,
        /// Kind name of the right operand.
        right: &'static str,
    },
    /// A unary operator was applied to an operand kind it does not support.
    #[error("Bad operand type for unary {op}: {operand}")]
    UnaryTypeMismatch {
        /// The operator.
        op:      UnaryOperator,
        /// Kind name of the operand.
        operand: &'static str,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Integer overflow while computing {op}")]
    Overflow {
        /// Symbol of the operation that overflowed.
        op: &'static str,
    },
    /// An integer could not be converted to a float without losing precision.
    #[error("Integer {value} is too large to convert to a float")]
    IntegerTooLarge {
        /// The integer value.
        value: i64,
    },
}
