use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The variable bindings of a single run.
///
/// There is exactly one namespace: no nested scopes and no shadowing. Both
/// assignments and `for` loop variables write here, and a binding lives until
/// the run ends.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if `name` was never bound.
    ///
    /// # Example
    /// ```
    /// use pisc::interpreter::{evaluator::environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(3));
    ///
    /// assert_eq!(env.get("x").unwrap(), &Value::Integer(3));
    /// assert_eq!(env.get("y").unwrap_err().to_string(), "Variable 'y' not defined");
    /// ```
    pub fn get(&self, name: &str) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Creates or overwrites a binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
