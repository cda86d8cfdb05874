use serde::{Serialize, Serializer, ser::SerializeMap};

/// A whole parsed program.
///
/// The program owns its statements; statements and expressions form a strict
/// tree. Serializing a program yields the documented mapping form
/// `{"Program": {"statements": [...]}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Converts the program to its structured mapping form.
    ///
    /// Each node becomes a single-key object named after its kind; absent
    /// optional fields become `null`. Comparing two such values is insensitive
    /// to key order.
    ///
    /// # Errors
    /// Returns the `serde_json` error if a node fails to serialize.
    ///
    /// # Example
    /// ```
    /// let program = pisc::parse("print(1)").unwrap();
    ///
    /// assert_eq!(program.to_json().unwrap(),
    ///            serde_json::json!({
    ///                "Program": { "statements": [ { "Print": { "expr": { "Number": { "value": 1 } } } } ] }
    ///            }));
    /// ```
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Fields<'a> {
            statements: &'a [Statement],
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Program", &Fields { statements: &self.statements })?;
        map.end()
    }
}

/// Represents a statement.
///
/// Statements are executed for their side effects on the environment and on the
/// output sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `name = expr`; creates or overwrites a binding.
    Assign {
        /// The name of the variable.
        name: String,
        /// The value which is being assigned.
        expr: Expr,
    },
    /// `print(expr)`; appends the value to the output.
    Print {
        /// The printed expression.
        expr: Expr,
    },
    /// `if` with optional `else`. An `elseif` chain is stored as a nested
    /// `If` that is the only statement of `else_branch`.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statements run if the condition is truthy.
        then_branch: Vec<Statement>,
        /// Statements run otherwise, if any.
        else_branch: Option<Vec<Statement>>,
    },
    /// `while condition { body }`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
    },
    /// `for var in range(count) { body }`
    For {
        /// The loop variable, bound to `0..count` in turn.
        var:   String,
        /// The iteration count, a non-negative literal at parse time.
        count: i64,
        /// The loop body.
        body:  Vec<Statement>,
    },
}

/// A numeric literal. Integer and float literals stay distinct through
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// A literal without a decimal point.
    Integer(i64),
    /// A literal with a decimal point.
    Float(f64),
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// A binary operation.
    #[serde(rename = "BinOp")]
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// Reference to a variable by name.
    #[serde(rename = "Var")]
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A numeric literal.
    Number {
        /// The literal value.
        value: Number,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
    },
    /// A string literal, already unescaped.
    String {
        /// The literal value.
        value: String,
    },
    /// `null`.
    Null {},
}

impl Expr {
    /// Number of nodes on the longest path from this expression down to a
    /// leaf; a literal has height `1`.
    ///
    /// # Example
    /// ```
    /// let program = pisc::parse("print(1 + 2 * 3)").unwrap();
    /// let pisc::ast::Statement::Print { expr } = &program.statements[0] else { panic!() };
    ///
    /// assert_eq!(expr.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Self::UnaryOp { operand, .. } => 1 + operand.height(),
            _ => 1,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Addition (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Sub,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Mul,
    /// Division (`/`)
    #[serde(rename = "/")]
    Div,
    /// Equal to (`==`)
    #[serde(rename = "==")]
    Equal,
    /// Not equal to (`!=`)
    #[serde(rename = "!=")]
    NotEqual,
    /// Less than (`<`)
    #[serde(rename = "<")]
    Less,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    LessEqual,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    Greater,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    #[serde(rename = "-")]
    Negate,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        }
    }
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
