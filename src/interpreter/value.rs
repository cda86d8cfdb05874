use serde::Serialize;

use crate::{ast::Number, error::RuntimeError, interpreter::evaluator::core::EvalResult,
            util::num::exact_float};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in assignments,
/// conditions and printed output. Values serialize to their plain JSON
/// counterparts (`Null` becomes `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals and by comparison operators.
    Bool(bool),
    /// A string.
    Str(String),
    /// The `null` value.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl Value {
    /// Decides whether the value counts as true in a condition.
    ///
    /// Numbers are truthy iff nonzero, booleans are themselves, strings are
    /// truthy iff nonempty, and `null` is always falsy.
    ///
    /// # Example
    /// ```
    /// use pisc::interpreter::value::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::Float(0.5).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Returns the name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Null => "null",
        }
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Converts a numeric value to `f64` for mixed integer/float arithmetic.
    ///
    /// # Returns
    /// - `Ok(Some(f64))`: If the value is numeric.
    /// - `Ok(None)`: If the value is not a number.
    /// - `Err(RuntimeError::IntegerTooLarge)`: If an integer cannot be
    ///   represented exactly.
    pub fn as_float(&self) -> EvalResult<Option<f64>> {
        match self {
            Self::Float(r) => Ok(Some(*r)),
            Self::Integer(n) => exact_float(*n).map(Some)
                                               .ok_or(RuntimeError::IntegerTooLarge { value: *n }),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Display for Value {
    /// Integers print in decimal, floats always keep a fractional part
    /// (`4.0`), strings print raw, and `null` prints as `null`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}
