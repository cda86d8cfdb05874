use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement, utils::expect},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// closing `}` is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting depth of the statements inside the block.
///
/// # Returns
/// The statements of the block, possibly empty.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the block does not start with `{`,
/// - a statement inside fails to parse,
/// - the input ends before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::BlockStart)?;

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::BlockEnd => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens, depth)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
}
