use std::iter::Peekable;

use crate::{
    ast::{Expr, Number, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check_depth, expect, unescape_string},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `-` (numeric negation). Unary operators are
/// right-associative and bind tighter than every binary operator, so `--x`
/// parses as `-(-x)` and `-2 * 3` as `(-2) * 3`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the resulting node.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(minus) = tokens.next_if(|token| token.kind == TokenKind::Minus) {
        check_depth(depth, minus)?;
        let operand = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::UnaryOp { op:      UnaryOperator::Negate,
                                  operand: Box::new(operand), });
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// numeric, string, boolean and null literals, variables, and parenthesized
/// expressions.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | BOOLEAN | NULL | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of the resulting node.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    check_depth(depth, token)?;

    match token.kind {
        TokenKind::Number => Ok(Expr::Number { value: parse_number(token)? }),
        TokenKind::String => Ok(Expr::String { value: unescape_string(&token.text) }),
        TokenKind::Boolean => Ok(Expr::Boolean { value: token.text == "true" }),
        TokenKind::Null => Ok(Expr::Null {}),
        TokenKind::Identifier => Ok(Expr::Variable { name: token.text.clone() }),
        TokenKind::LParen => parse_grouping(tokens, depth),
        _ => Err(ParseError::unexpected(token)),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// Parentheses add no node, but each pair still counts as one level of
/// nesting.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, depth + 1)?;
    expect(tokens, TokenKind::RParen)?;
    Ok(expr)
}

/// Converts a `NUMBER` token to its literal value.
///
/// Text containing a decimal point becomes [`Number::Float`], anything else
/// [`Number::Integer`].
///
/// # Errors
/// Returns `ParseError::LiteralTooLarge` if an integer literal does not fit in
/// `i64`.
pub(crate) fn parse_number(token: &Token) -> ParseResult<Number> {
    let too_large = || ParseError::LiteralTooLarge { value:    token.text.clone(),
                                                     line:     token.line,
                                                     position: token.offset, };

    if token.text.contains('.') {
        token.text.parse().map(Number::Float).map_err(|_| too_large())
    } else {
        token.text.parse().map(Number::Integer).map_err(|_| too_large())
    }
}
