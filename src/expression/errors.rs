use thiserror::Error;

/// Errors that can occur while tokenizing an expression string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("number has a leading zero at position {0}")]
    LeadingZero(usize),
    #[error("number at position {0} is too large")]
    NumberTooLarge(usize),
    #[error("unrecognized character '{0}' at position {1}")]
    UnrecognizedCharacter(char, usize),
}

/// Errors that can occur while evaluating an expression string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("division by zero")]
    DivisionByZero,
    #[error("expected a number or '('")]
    ExpectedFactor,
    #[error("expected ')'")]
    ExpectedCloseParen,
    #[error("trailing tokens after expression")]
    TrailingTokens,
}
