/// Parser entry points and shared result type.
///
/// Holds the program-level loop and the expression entry point that every
/// other tier recurses back into.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix negation, literals, variables and parenthesized groups.
pub mod unary;

/// Binary operator tiers.
///
/// Implements the comparison, additive and multiplicative precedence levels.
pub mod binary;

/// Brace-delimited statement blocks.
pub mod block;

/// Token-level helpers and string literal decoding.
pub mod utils;

/// Statement parsing.
///
/// Implements assignments, `print`, `if`/`elseif`/`else`, `while` and `for`.
pub mod statement;
