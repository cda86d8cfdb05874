use std::iter::Peekable;

use crate::{
    ast::{Number, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            unary::parse_number,
            utils::{check_depth, expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`name = expr`),
/// - a print statement (`print(expr)`),
/// - an `if` statement with optional `elseif` and `else` clauses,
/// - a `while` loop,
/// - a `for` loop over `range(count)`.
///
/// The statement kind is chosen from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `depth`: Nesting depth of the statement; `1` at the top level.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` if the first token cannot start a statement, if the
/// chosen construct is malformed, or if it is nested too deeply.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    check_depth(depth, token)?;

    let statement = match token.kind {
        TokenKind::Identifier => parse_assignment(tokens, token.text.clone(), depth)?,
        TokenKind::Print => parse_print(tokens, depth)?,
        TokenKind::If => parse_if(tokens, depth)?,
        TokenKind::While => parse_while(tokens, depth)?,
        TokenKind::For => parse_for(tokens, depth)?,
        _ => return Err(ParseError::unexpected(token)),
    };

    log::trace!("parsed statement at line {}", token.line);

    Ok(statement)
}

/// Parses the rest of an assignment after its identifier.
///
/// Grammar: `assignment := IDENTIFIER "=" expression`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: String,
                           depth: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Equals)?;
    let expr = parse_expression(tokens, depth + 1)?;
    Ok(Statement::Assign { name, expr })
}

/// Parses the rest of a print statement after `print`.
///
/// Grammar: `print := "print" "(" expression ")"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen)?;
    let expr = parse_expression(tokens, depth + 1)?;
    expect(tokens, TokenKind::RParen)?;
    Ok(Statement::Print { expr })
}

/// Parses an `if` statement after its `if` keyword.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     elseif <condition> { ... }
///     else { ... }
/// ```
/// Any number of `elseif` clauses may follow the first block, then at most one
/// `else`. The clauses are folded right to left into nested `If` statements,
/// each one the sole statement of the previous clause's `else_branch`, so the
/// first matching condition in source order wins.
///
/// Because of that folding, every `elseif` sits one level deeper than the
/// clause before it.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth + 1)?;
    let then_branch = parse_block(tokens, depth + 1)?;

    let mut elifs = Vec::new();
    while let Some(keyword) = tokens.next_if(|token| token.kind == TokenKind::ElseIf) {
        let nested = depth + 1 + elifs.len();
        check_depth(nested, keyword)?;

        let condition = parse_expression(tokens, nested + 1)?;
        let body = parse_block(tokens, nested + 1)?;
        elifs.push((condition, body));
    }

    let else_branch = if tokens.next_if(|token| token.kind == TokenKind::Else).is_some() {
        Some(parse_block(tokens, depth + 1 + elifs.len())?)
    } else {
        None
    };

    let else_branch =
        elifs.into_iter()
             .rev()
             .fold(else_branch, |else_branch, (condition, then_branch)| {
                 Some(vec![Statement::If { condition,
                                           then_branch,
                                           else_branch }])
             });

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Parses a `while` loop after its keyword.
///
/// Grammar: `while := "while" expression block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth + 1)?;
    let body = parse_block(tokens, depth + 1)?;
    Ok(Statement::While { condition, body })
}

/// Parses a `for` loop after its keyword.
///
/// Only one shape is accepted, and the iteration count must be a literal:
///
/// ```text
///     for IDENTIFIER in range ( NUMBER ) { ... }
/// ```
///
/// # Errors
/// Returns a `ParseError` if:
/// - any part of the fixed shape is missing,
/// - the count is not a whole number (`range(2.5)`).
fn parse_for<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let var = parse_identifier(tokens)?;
    expect(tokens, TokenKind::In)?;
    expect(tokens, TokenKind::Range)?;
    expect(tokens, TokenKind::LParen)?;

    let literal = expect(tokens, TokenKind::Number)?;
    let Number::Integer(count) = parse_number(literal)? else {
        return Err(ParseError::InvalidLoopCount { value:    literal.text.clone(),
                                                  line:     literal.line,
                                                  position: literal.offset, });
    };

    expect(tokens, TokenKind::RParen)?;
    let body = parse_block(tokens, depth + 1)?;

    Ok(Statement::For { var, count, body })
}
