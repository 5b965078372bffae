use log::debug;

use crate::expression::errors::LexError;

/// A single lexical token of the puzzle grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Split `text` into tokens, skipping whitespace.
///
/// Integer literals never carry a superfluous leading zero: a digit run of
/// length >= 2 starting with `0` is rejected, matching the puzzle's rule.
///
/// # Errors
///
/// Returns an error on a leading-zero literal or any character outside the
/// puzzle alphabet.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\n' => {
                i += 1;
            }
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            b'/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            b'0'..=b'9' => {
                let start = i;
                let mut value: i64 = 0;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(bytes[i] - b'0')))
                        .ok_or(LexError::NumberTooLarge(start))?;
                    i += 1;
                }
                if i - start >= 2 && bytes[start] == b'0' {
                    debug!("Rejecting literal with leading zero at {} in '{}'", start, text);
                    return Err(LexError::LeadingZero(start));
                }
                tokens.push(Token::Number(value));
            }
            _ => {
                // A multi-byte char errors at its first byte, so `i` is a boundary.
                let c = text[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter(c, i));
            }
        }
    }

    Ok(tokens)
}
