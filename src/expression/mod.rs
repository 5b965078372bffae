//! Expression module split into submodules for clarity

mod errors;
mod eval;
mod token;
mod value;

pub use errors::{LexError, ParseError};
pub use eval::evaluate;
pub use token::{Token, tokenize};
pub use value::Value;

#[cfg(test)]
mod tests;
