use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::check_depth},
    },
};

/// Parses relational and equality operators.
///
/// This is the lowest-precedence tier. It handles `==`, `!=`, `<`, `<=`, `>`
/// and `>=`, all left-associative, so `a < b == c` parses as `(a < b) == c`.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `depth`: Nesting depth of the resulting node.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, is_comparison_op, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are unary
/// expressions, so `-2 * 3` parses as `(-2) * 3`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                           parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree for every operator
/// accepted by `accepts`.
///
/// Each fold pushes everything parsed so far one level down, so the height of
/// the growing tree is tracked and checked against the nesting limit.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 accepts: impl Fn(BinaryOperator) -> bool,
                                 operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens, depth)?;
    let mut height = left.height();

    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens, depth + 1)?;
        height = height.max(right.height()) + 1;
        check_depth(depth + height - 1, token)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }

    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use pisc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Leq),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Times => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::Neq => Some(BinaryOperator::NotEqual),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Leq => Some(BinaryOperator::LessEqual),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Geq => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison tier.
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
