/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic operators `+`, `-`, `*` and `/`.
pub mod arithmetic;

/// Equality and ordering operators.
pub mod comparison;
