//! # pisc
//!
//! pisc is an interpreter for Pisc, a small imperative scripting language.
//! Source text is tokenized, parsed into an abstract syntax tree and executed by
//! a tree-walking evaluator that records every printed value in order.
//!
//! The language has assignment, `print`, `if`/`elseif`/`else`, `while` and a
//! bounded `for ... in range(n)` loop over numbers, booleans, strings and
//! `null`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::PiscError,
    interpreter::{evaluator::core::Interpreter, parser::core::parse_program, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Serializes the tree into its structured mapping form.
pub mod ast;
/// Renders syntax trees as Graphviz graphs.
pub mod dot;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code and
/// the [`error::PiscError`] wrapper returned by the pipeline functions below.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Produces the exact messages shown to users.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use interpreter::lexer::{Lexed, tokenize};

/// Tokenizes and parses a source string.
///
/// Lexical errors are checked first: if the source contains any illegal
/// character, all of them are reported together and the parser never runs.
///
/// # Errors
/// - `PiscError::Lex` with every illegal character found.
/// - `PiscError::Parse` with the first syntax error.
///
/// # Examples
/// ```
/// use pisc::ast::Statement;
///
/// let program = pisc::parse("x = 1\nprint(x)").unwrap();
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[1], Statement::Print { .. }));
///
/// let err = pisc::parse("print(1").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected end of input");
/// ```
pub fn parse(source: &str) -> Result<Program, PiscError> {
    let tokens = tokenize(source).into_result().map_err(PiscError::Lex)?;
    Ok(parse_program(&tokens)?)
}

/// Runs a source string through the whole pipeline and returns what it
/// printed.
///
/// Every call uses a fresh interpreter, so no variables survive between calls.
///
/// # Errors
/// Returns a `PiscError` describing the first stage that failed.
///
/// # Examples
/// ```
/// use pisc::interpreter::value::Value;
///
/// let output = pisc::run("for i in range(3) { print(i) }").unwrap();
/// assert_eq!(output, vec![Value::Integer(0), Value::Integer(1), Value::Integer(2)]);
///
/// // Intentional error: `y` was never assigned.
/// let err = pisc::run("x = y + 1").unwrap_err();
/// assert_eq!(err.to_string(), "Variable 'y' not defined");
/// ```
pub fn run(source: &str) -> Result<Vec<Value>, PiscError> {
    let program = parse(source)?;
    Ok(Interpreter::new().run(&program)?)
}

/// Runs a parsed program and reports the result as one JSON object holding
/// the syntax tree and the printed values:
/// `{"ast": {"Program": ...}, "output": [...]}`.
///
/// # Errors
/// - `PiscError::Runtime` if execution fails; no partial output is reported.
/// - `PiscError::Json` if the syntax tree cannot be serialized.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let program = pisc::parse("print(1 + 2)").unwrap();
/// let report = pisc::run_to_json(&program).unwrap();
///
/// assert_eq!(report["output"], json!([3]));
/// assert!(report["ast"]["Program"]["statements"].is_array());
/// ```
pub fn run_to_json(program: &Program) -> Result<serde_json::Value, PiscError> {
    let output = Interpreter::new().run(program)?;
    Ok(serde_json::json!({ "ast": program.to_json()?, "output": output }))
}
