/// Lexical errors.
///
/// Defines the error recorded for every character the lexer cannot classify.
/// Lexical errors never stop the scan; they are collected and returned next to
/// the tokens so that all illegal characters of a source are reported at once.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parsing stops at the first error, which carries the offending token's kind,
/// text, line and byte offset.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, division by zero, operand type
/// mismatches and integer overflow.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the full tokenize → parse → run pipeline.
///
/// The three stage errors stay separate types; this enum only exists so the
/// pipeline entry points in the crate root can return a single error type.
/// It also carries the rare JSON failure of the reporting helpers.
#[derive(Debug, Error)]
pub enum PiscError {
    /// The source contained one or more illegal characters. Parsing was not
    /// attempted.
    #[error("{}", join_lines(.0))]
    Lex(Vec<LexError>),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A result could not be converted to JSON.
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl PiscError {
    /// Returns the failure as the list of human-readable messages reported to
    /// users: one entry per lexical error, or a single entry otherwise.
    ///
    /// # Example
    /// ```
    /// let err = pisc::run("print(1 / 0)").unwrap_err();
    ///
    /// assert_eq!(err.messages(), vec!["Division by zero".to_string()]);
    /// ```
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Lex(errors) => errors.iter().map(ToString::to_string).collect(),
            Self::Parse(e) => vec![e.to_string()],
            Self::Runtime(e) => vec![e.to_string()],
            Self::Json(e) => vec![format!("Failed to serialize result: {e}")],
        }
    }
}

fn join_lines(errors: &[LexError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
