/// The evaluator module executes AST nodes and collects printed output.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison operations, manages the variable
/// environment, and records every printed value in order.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables and control flow.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, punctuation and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source location.
/// - Recognizes keywords and `#` comments.
/// - Collects lexical errors for illegal characters without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions, following a fixed grammar with explicit operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar, reporting the first error with token context.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (integers, floats, booleans, strings and null),
/// the truthiness rule used by conditions, and how values are displayed and
/// serialized.
pub mod value;
