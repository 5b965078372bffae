use thiserror::Error;

/// Errors raised when caller-supplied puzzle data is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported depth {0}: expected 5, 6, or 8")]
    UnsupportedDepth(usize),
    #[error("guess '{guess}' has length {actual}, expected {expected}")]
    GuessLength {
        guess: String,
        actual: usize,
        expected: usize,
    },
    #[error("response '{response}' has length {actual}, expected {expected}")]
    ResponseLength {
        response: String,
        actual: usize,
        expected: usize,
    },
    #[error("guess '{0}' does not evaluate to the target")]
    GuessDoesNotMatchTarget(String),
    #[error("malformed response '{0}': expected only 'o', 'x', '_', '-' or ' '")]
    MalformedResponse(String),
}
