use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Rejects a node that would sit deeper than [`MAX_NESTING`] in the tree.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` located at `token` when `depth` is
/// past the limit.
pub(in crate::interpreter::parser) fn check_depth(depth: usize,
                                                   token: &Token)
                                                   -> ParseResult<()> {
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { line:     token.line,
                                                position: token.offset, });
    }
    Ok(())
}

/// Consumes the next token, requiring it to be of kind `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required kind.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token has another kind,
/// - the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(ParseError::unexpected(token)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier).map(|token| token.text.clone())
}

/// Decodes the runtime value of a quoted string literal.
///
/// The surrounding quotes are removed and escape sequences are interpreted:
/// `\\`, `\"`, `\'`, `\n`, `\t`, `\r`, `\0`, `\a`, `\b`, `\f`, `\v`,
/// octal `\ooo`, `\xhh`, `\uhhhh`, `\Uhhhhhhhh`, and a backslash followed by a
/// newline (removed). Any other escape keeps its backslash.
///
/// If an escape is malformed (for example `\x4` or a code point that is not a
/// valid character), the raw text between the quotes is returned unchanged.
///
/// # Example
/// ```
/// use pisc::interpreter::parser::utils::unescape_string;
///
/// assert_eq!(unescape_string(r#""a\"b\n""#), "a\"b\n");
/// assert_eq!(unescape_string(r#""\x41\q""#), "A\\q");
/// ```
#[must_use]
pub fn unescape_string(literal: &str) -> String {
    let inner = literal.strip_prefix('"')
                       .and_then(|s| s.strip_suffix('"'))
                       .unwrap_or(literal);

    decode_escapes(inner).unwrap_or_else(|| inner.to_string())
}

fn decode_escapes(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };

        match escape {
            '\n' => {},
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0'..='7' => {
                let mut code = escape.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        },
                        None => break,
                    }
                }
                out.push(char::from_u32(code)?);
            },
            'x' => out.push(hex_escape(&mut chars, 2)?),
            'u' => out.push(hex_escape(&mut chars, 4)?),
            'U' => out.push(hex_escape(&mut chars, 8)?),
            other => {
                out.push('\\');
                out.push(other);
            },
        }
    }

    Some(out)
}

fn hex_escape(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<char> {
    let mut code = 0;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
