use log::debug;

use crate::expression::errors::ParseError;
use crate::expression::token::{Token, tokenize};
use crate::expression::value::Value;

/// Evaluate an expression string over the puzzle grammar:
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := INTEGER | '(' expr ')'
/// ```
///
/// The raw text must have matching `(`/`)` counts before anything else is
/// attempted; that check is much cheaper than the recursive parse and
/// rejects most malformed candidates. Recursion depth is bounded by the
/// candidate length (at most 8 in any supported puzzle), so no explicit
/// stack guard is needed.
///
/// # Errors
///
/// Fails on lexing errors, unbalanced parentheses, malformed structure,
/// division by zero, or tokens left over after a complete expression.
pub fn evaluate(text: &str) -> Result<Value, ParseError> {
    let opens = text.bytes().filter(|&b| b == b'(').count();
    let closes = text.bytes().filter(|&b| b == b')').count();
    if opens != closes {
        debug!("Unbalanced parentheses in '{}'", text);
        return Err(ParseError::UnbalancedParens);
    }

    let tokens = tokenize(text)?;
    let (value, next) = parse_expr(&tokens, 0)?;
    if next != tokens.len() {
        debug!("Trailing tokens after position {} in '{}'", next, text);
        return Err(ParseError::TrailingTokens);
    }
    Ok(value)
}

fn parse_expr(tokens: &[Token], i: usize) -> Result<(Value, usize), ParseError> {
    let (mut value, mut i) = parse_term(tokens, i)?;
    while let Some(&op) = tokens.get(i) {
        match op {
            Token::Plus => {
                let (rhs, next) = parse_term(tokens, i + 1)?;
                value = value.add(rhs);
                i = next;
            }
            Token::Minus => {
                let (rhs, next) = parse_term(tokens, i + 1)?;
                value = value.sub(rhs);
                i = next;
            }
            _ => break,
        }
    }
    Ok((value, i))
}

fn parse_term(tokens: &[Token], i: usize) -> Result<(Value, usize), ParseError> {
    let (mut value, mut i) = parse_factor(tokens, i)?;
    while let Some(&op) = tokens.get(i) {
        match op {
            Token::Star => {
                let (rhs, next) = parse_factor(tokens, i + 1)?;
                value = value.mul(rhs);
                i = next;
            }
            Token::Slash => {
                let (rhs, next) = parse_factor(tokens, i + 1)?;
                value = value.try_div(rhs)?;
                i = next;
            }
            _ => break,
        }
    }
    Ok((value, i))
}

fn parse_factor(tokens: &[Token], i: usize) -> Result<(Value, usize), ParseError> {
    match tokens.get(i) {
        Some(Token::Number(n)) => Ok((Value::Exact(*n), i + 1)),
        Some(Token::LParen) => {
            let (value, next) = parse_expr(tokens, i + 1)?;
            match tokens.get(next) {
                Some(Token::RParen) => Ok((value, next + 1)),
                _ => Err(ParseError::ExpectedCloseParen),
            }
        }
        _ => Err(ParseError::ExpectedFactor),
    }
}
