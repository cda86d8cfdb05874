use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that no grammar rule accepts at this point.
    #[error("Syntax error at token '{kind}', value '{value}', line {line}, pos {position}")]
    UnexpectedToken {
        /// The kind of the offending token.
        kind:     TokenKind,
        /// The source text of the offending token.
        value:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    /// A numeric literal does not fit the integer range.
    #[error("Literal '{value}' is too large, line {line}, pos {position}")]
    LiteralTooLarge {
        /// The source text of the literal.
        value:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// The literal inside `range(...)` is not a whole number.
    #[error("Loop count '{value}' must be a whole number, line {line}, pos {position}")]
    InvalidLoopCount {
        /// The source text of the literal.
        value:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// Statements and expressions are nested deeper than the parser allows.
    #[error("Nesting too deep, line {line}, pos {position}")]
    NestingTooDeep {
        /// The source line of the token that went past the limit.
        line:     usize,
        /// Byte offset of that token in the source.
        position: usize,
    },
}

impl ParseError {
    /// Builds an [`ParseError::UnexpectedToken`] from the token that caused it.
    #[must_use]
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken { kind:     token.kind,
                                value:    token.text.clone(),
                                line:     token.line,
                                position: token.offset, }
    }
}
