use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents a character the lexer could not turn into a token.
pub enum LexError {
    /// A character that matches no token rule.
    #[error("Illegal character '{character}' at line {line}, col {column}")]
    IllegalCharacter {
        /// The rejected character.
        character: char,
        /// The source line where the character appears (1-based).
        line:      usize,
        /// The column of the character within its line (1-based).
        column:    usize,
    },
}
