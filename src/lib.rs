//! Mathdle - a solver library for fixed-length arithmetic guessing puzzles
//!
//! Given a puzzle depth (the exact length of the hidden expression) and the
//! value it evaluates to, this library enumerates every candidate expression
//! consistent with the guess/response feedback accumulated so far and ranks
//! them as next guesses.

pub mod alphabet;
pub mod expression;
pub mod feedback;
pub mod solver;

// Re-export the main public API
pub use expression::{LexError, ParseError, Value, evaluate};
pub use feedback::{Feedback, ValidationError};
pub use solver::{PuzzleSolver, Strategy};

/// Rank the opening guesses for a fresh puzzle of the given depth and target.
///
/// This is a convenience function that builds a solver with no feedback and
/// runs one solve with the auto-selected strategy. Drive a [`PuzzleSolver`]
/// directly to feed guess/response rounds in.
///
/// # Errors
///
/// Fails when `depth` is not one of the supported puzzle sizes (5, 6 or 8).
///
/// # Examples
///
/// ```
/// use mathdle::best_guesses;
///
/// let candidates = best_guesses(5, 9.0).expect("supported depth");
/// assert!(candidates.iter().all(|c| c.len() == 5));
/// ```
pub fn best_guesses(depth: usize, target: f64) -> Result<Vec<String>, ValidationError> {
    let solver = PuzzleSolver::new(depth, target)?;
    Ok(solver.solve(None))
}
