use logos::Logos;
use serde::{Serialize, Serializer, ser::SerializeTuple};

use crate::error::LexError;

/// Classifies a lexical token.
///
/// The set of kinds is closed. Keywords are matched as whole words, so an
/// identifier such as `iffy` or `printer` stays an [`TokenKind::Identifier`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    Neq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    Leq,
    /// `>=`
    #[token(">=")]
    Geq,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    BlockStart,
    /// `}`
    #[token("}")]
    BlockEnd,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `# comments` running to the end of the line.
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,
    /// Numeric literals such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Double-quoted string literals with backslash escapes.
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    /// Identifier tokens; variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `true` or `false`
    #[token("true")]
    #[token("false")]
    Boolean,
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `range`
    #[token("range")]
    Range,
    /// `print`
    #[token("print")]
    Print,
}

impl TokenKind {
    /// Returns the upper-case name used when token streams are shown or
    /// serialized.
    ///
    /// # Example
    /// ```
    /// use pisc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::BlockStart.name(), "BLOCK_START");
    /// assert_eq!(TokenKind::LBracket.name(), "LBRACE");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::Equals => "EQUALS",
            Self::Eq => "EQ",
            Self::Neq => "NEQ",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Leq => "LEQ",
            Self::Geq => "GEQ",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACE",
            Self::RBracket => "RBRACE",
            Self::BlockStart => "BLOCK_START",
            Self::BlockEnd => "BLOCK_END",
            Self::Dot => "DOT",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Comment => "COMMENT",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::If => "IF",
            Self::ElseIf => "ELSEIF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::In => "IN",
            Self::Range => "RANGE",
            Self::Print => "PRINT",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified lexical unit with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The exact source text of the token, quotes included for strings.
    pub text:   String,
    /// The source line (1-based).
    pub line:   usize,
    /// The column within the line (1-based, counted in characters).
    pub column: usize,
    /// Byte offset of the token in the source.
    pub offset: usize,
}

/// Tokens serialize as `[kind, text]` pairs, the shape consumed by tooling.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.kind)?;
        pair.serialize_element(&self.text)?;
        pair.end()
    }
}

/// The result of scanning one source string.
///
/// Errors are returned next to the tokens instead of aborting the scan. A
/// non-empty `errors` list means the token stream must not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    /// Every token found, comments included, in source order.
    pub tokens: Vec<Token>,
    /// One entry per illegal character, in source order.
    pub errors: Vec<LexError>,
}

impl Lexed {
    /// Returns `true` if no illegal character was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the scan into the tokens, or the errors if there were any.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Maps byte offsets to line and column numbers.
struct LineIndex<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { source, starts }
    }

    fn locate(&self, offset: usize) -> (usize, usize) {
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.starts[index];
        let column = self.source[line_start..offset].chars().count() + 1;
        (index + 1, column)
    }
}

/// Scans `source` into tokens.
///
/// Spaces, tabs and newlines separate tokens and are discarded. A character
/// that matches no rule is recorded as a [`LexError`] and skipped, and
/// scanning resumes right after it. Every call starts from line 1 with an empty
/// error list.
///
/// # Example
/// ```
/// use pisc::interpreter::lexer::{TokenKind, tokenize};
///
/// let lexed = tokenize("x = 1 @ 2");
/// let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Equals, TokenKind::Number, TokenKind::Number]);
/// assert_eq!(lexed.errors[0].to_string(),
///            "Illegal character '@' at line 1, col 7");
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexed {
    let lines = LineIndex::new(source);
    let mut lexed = Lexed::default();

    let mut base = 0;
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let start = base + span.start;

        if let Ok(kind) = result {
            let (line, column) = lines.locate(start);
            lexed.tokens.push(Token { kind,
                                      text: lexer.slice().to_string(),
                                      line,
                                      column,
                                      offset: start });
            continue;
        }

        let Some(character) = source[start..].chars().next() else {
            break;
        };
        let (line, column) = lines.locate(start);
        let error = LexError::IllegalCharacter { character,
                                                 line,
                                                 column };
        log::warn!("{error}");
        lexed.errors.push(error);

        // Restart one character further so that the rest of an unmatched run is
        // scanned again.
        base = start + character.len_utf8();
        lexer = TokenKind::lexer(&source[base..]);
    }

    log::debug!("lexed {} tokens with {} errors",
                lexed.tokens.len(),
                lexed.errors.len());

    lexed
}
