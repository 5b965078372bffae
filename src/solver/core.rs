use log::info;

use crate::alphabet::{CharSet, PARENS};
use crate::feedback::{Feedback, ValidationError};
use crate::solver::constants::{FULL_ALPHABET_SIZE, PAREN_MIN_DEPTH, SCATTER_MIN_ALPHABET};
use crate::solver::rank::rank;
use crate::solver::search::Enumeration;
use crate::solver::strategy::Strategy;

/// Main solver for a fixed-length arithmetic guessing puzzle.
///
/// Feed it the rounds played so far with [`add`](PuzzleSolver::add), then
/// ask [`solve`](PuzzleSolver::solve) for every expression of the puzzle's
/// length that evaluates to the target and survives the accumulated
/// feedback, ordered best guess first.
pub struct PuzzleSolver {
    feedback: Feedback,
    allow_identities: bool,
    node_limit: Option<u64>,
}

impl PuzzleSolver {
    /// # Errors
    ///
    /// Fails when `depth` is not one of the supported puzzle sizes.
    pub fn new(depth: usize, target: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            feedback: Feedback::new(depth, target)?,
            allow_identities: false,
            node_limit: None,
        })
    }

    /// Keep algebraically redundant forms such as `1*x`, `x/1` and `x+0`
    /// in the search space instead of cutting them.
    pub fn set_allow_identities(&mut self, allow: bool) {
        self.allow_identities = allow;
    }

    /// Stop descending after roughly `limit` search nodes. A safety valve
    /// for pathological inputs; when it fires, the candidate set may be
    /// incomplete and is no longer schedule-independent.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Apply one round of feedback.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationError`] on malformed input, leaving the
    /// accumulated state untouched.
    pub fn add(&mut self, guess: &str, response: &str) -> Result<(), ValidationError> {
        self.feedback.add(guess, response)
    }

    /// Forget every feedback round, keeping the depth and target.
    pub fn reset(&mut self) {
        self.feedback.reset();
    }

    /// The raw accumulated feedback, for display-only callers.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Enumerate and rank every candidate consistent with the feedback so
    /// far. `strategy` forces a search mode; `None` auto-selects one.
    pub fn solve(&self, strategy: Option<Strategy>) -> Vec<String> {
        let alphabet = CharSet::full() - self.feedback.excluded();
        let strategy = strategy.unwrap_or_else(|| self.auto_strategy(alphabet));
        self.solve_with(alphabet, strategy)
    }

    fn solve_with(&self, mut alphabet: CharSet, strategy: Strategy) -> Vec<String> {
        let depth = self.feedback.depth();
        if depth < PAREN_MIN_DEPTH {
            alphabet -= PARENS;
        }

        info!(
            "Solving depth={} target={} strategy={} stage={}",
            depth,
            self.feedback.target(),
            strategy,
            self.feedback.stage(),
        );
        info!(
            "hit={}, out={{{}}}, alphabet={{{}}}",
            self.hit_pattern(),
            self.feedback.excluded().iter().collect::<String>(),
            alphabet.iter().collect::<String>(),
        );

        let enumeration = Enumeration::new(
            &self.feedback,
            alphabet,
            strategy,
            self.allow_identities,
            self.node_limit,
        );

        // Answers tend to spend the whole operator budget; try the most
        // complex level first and stop at the first one that yields.
        let mut candidates = Vec::new();
        for budget in (1..=self.feedback.max_operators()).rev() {
            candidates = enumeration.run(budget);
            if !candidates.is_empty() {
                break;
            }
        }

        if candidates.is_empty() && strategy == Strategy::Bara {
            info!("bara strategy found no candidates, falling back to all");
            return self.solve_with(alphabet, Strategy::All);
        }

        info!("{} candidates survived", candidates.len());
        rank(candidates, depth)
    }

    /// Scattered probing pays off while nothing is pinned down: a full
    /// alphabet, or a hitless board with nearly all symbols still live.
    fn auto_strategy(&self, alphabet: CharSet) -> Strategy {
        if alphabet.len() == FULL_ALPHABET_SIZE
            || (!self.feedback.has_hits() && alphabet.len() >= SCATTER_MIN_ALPHABET)
        {
            Strategy::Bara
        } else {
            Strategy::All
        }
    }

    fn hit_pattern(&self) -> String {
        self.feedback
            .confirmed()
            .iter()
            .map(|slot| slot.unwrap_or('_'))
            .collect()
    }
}
