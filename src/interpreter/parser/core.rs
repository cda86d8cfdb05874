use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest node the parser builds, counting statements, blocks, operators and
/// parentheses from the top level down.
///
/// Every later stage walks the tree recursively, so the limit keeps hostile
/// input from exhausting the stack.
pub const MAX_NESTING: usize = 128;

/// Parses a complete token stream into a [`Program`].
///
/// `COMMENT` tokens are dropped before any grammar rule sees them, so a
/// comment-only line yields no statement. Statements need no separator; each
/// one ends where the next token can no longer continue it.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Tokens produced by a lexer run without errors.
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no recovery is attempted.
/// Input nested past [`MAX_NESTING`] fails with `ParseError::NestingTooDeep`.
///
/// # Example
/// ```
/// use pisc::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("a = 1 # one\nprint(a)").tokens;
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut tokens = tokens.iter()
                           .filter(|token| token.kind != TokenKind::Comment)
                           .peekable();

    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(&mut tokens, 1)?);
    }

    log::debug!("parsed {} top-level statements", statements.len());

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `depth`: Nesting depth of the expression's root node; `1` at the top.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use pisc::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("-(1 + 2) * 3").tokens;
/// let expr = parse_expression(&mut tokens.iter().peekable(), 1).unwrap();
///
/// assert_eq!(expr.height(), 4);
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_comparison(tokens, depth)
}
