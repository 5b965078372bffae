//! Accumulated guess/response feedback for one puzzle

mod errors;
mod state;

pub use errors::ValidationError;
pub use state::Feedback;
