/// Core evaluation logic.
///
/// Contains the [`core::Interpreter`] that executes statements, evaluates
/// expressions and collects printed output.
pub mod core;

/// The variable environment.
///
/// A single flat namespace mapping names to values for one run.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Handles arithmetic and comparisons, including the typing rules for mixed
/// operand kinds.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;
