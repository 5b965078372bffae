use std::collections::HashMap;

use log::{debug, warn};

use crate::alphabet::CharSet;
use crate::expression::evaluate;
use crate::feedback::errors::ValidationError;
use crate::solver::constants::{EPSILON, operator_budget};

/// Everything learned from the feedback rounds played so far.
///
/// One round is a `guess` of exactly `depth` characters together with a
/// per-position `response`: `o` marks a hit, `x` a character present
/// elsewhere, and `_`, `-` or space an absent slot. The state only ever
/// tightens; `reset` is the one way back.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    depth: usize,
    target: f64,
    max_operators: usize,
    excluded: CharSet,
    confirmed: Vec<Option<char>>,
    present_not_here: Vec<CharSet>,
    min_duplicates: HashMap<char, usize>,
    stage: usize,
}

impl Feedback {
    /// # Errors
    ///
    /// Fails when `depth` is not one of the supported puzzle sizes
    /// (5, 6 or 8), since the operator budget is derived from it.
    pub fn new(depth: usize, target: f64) -> Result<Self, ValidationError> {
        let max_operators =
            operator_budget(depth).ok_or(ValidationError::UnsupportedDepth(depth))?;
        Ok(Self {
            depth,
            target,
            max_operators,
            excluded: CharSet::EMPTY,
            confirmed: vec![None; depth],
            present_not_here: vec![CharSet::EMPTY; depth],
            min_duplicates: HashMap::new(),
            stage: 0,
        })
    }

    /// Apply one round of feedback.
    ///
    /// All validation happens before any field is touched, so a rejected
    /// round leaves the state exactly as it was.
    ///
    /// # Errors
    ///
    /// Fails when either string has the wrong length, the response uses a
    /// character outside `{o, x, _, -, space}`, or the guess does not
    /// evaluate to the stored target.
    ///
    /// # Panics
    ///
    /// Two rounds confirming different characters at the same position are
    /// contradictory caller data, not a recoverable condition; that case
    /// asserts.
    pub fn add(&mut self, guess: &str, response: &str) -> Result<(), ValidationError> {
        let guess_chars: Vec<char> = guess.chars().collect();
        let response_chars: Vec<char> = response.chars().collect();

        if guess_chars.len() != self.depth {
            return Err(ValidationError::GuessLength {
                guess: guess.to_string(),
                actual: guess_chars.len(),
                expected: self.depth,
            });
        }
        if response_chars.len() != self.depth {
            return Err(ValidationError::ResponseLength {
                response: response.to_string(),
                actual: response_chars.len(),
                expected: self.depth,
            });
        }
        if !response_chars.iter().all(|c| "ox_- ".contains(*c)) {
            warn!("Rejecting malformed response '{}'", response);
            return Err(ValidationError::MalformedResponse(response.to_string()));
        }
        match evaluate(guess) {
            Ok(value) if value.approx_eq(self.target, EPSILON) => {}
            _ => {
                warn!("Rejecting guess '{}': does not evaluate to {}", guess, self.target);
                return Err(ValidationError::GuessDoesNotMatchTarget(guess.to_string()));
            }
        }

        for (j, (&g, &r)) in guess_chars.iter().zip(&response_chars).enumerate() {
            match r {
                'o' => {
                    assert!(
                        self.confirmed[j].is_none() || self.confirmed[j] == Some(g),
                        "conflicting hit confirmation at position {}: {:?} vs '{}'",
                        j,
                        self.confirmed[j],
                        g,
                    );
                    self.confirmed[j] = Some(g);
                }
                'x' => {
                    self.present_not_here[j].insert(g);
                }
                _ => {
                    let earlier = guess_chars[..j].iter().filter(|&&c| c == g).count();
                    if earlier == 0 {
                        // First occurrence in this guess: a miss means the
                        // character appears nowhere in the answer.
                        self.excluded.insert(g);
                    } else {
                        // A missed repeat only bounds how many copies the
                        // answer can hold.
                        self.min_duplicates
                            .entry(g)
                            .and_modify(|bound| *bound = (*bound).min(earlier))
                            .or_insert(earlier);
                    }
                }
            }
        }
        self.stage += 1;
        debug!(
            "Stage {}: excluded={:?}, confirmed={:?}",
            self.stage,
            self.excluded.iter().collect::<String>(),
            self.confirmed,
        );
        Ok(())
    }

    /// Forget every feedback round, keeping the depth and target.
    pub fn reset(&mut self) {
        self.excluded = CharSet::EMPTY;
        self.confirmed = vec![None; self.depth];
        self.present_not_here = vec![CharSet::EMPTY; self.depth];
        self.min_duplicates.clear();
        self.stage = 0;
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max_operators(&self) -> usize {
        self.max_operators
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn excluded(&self) -> CharSet {
        self.excluded
    }

    pub fn confirmed(&self) -> &[Option<char>] {
        &self.confirmed
    }

    pub fn present_not_here(&self) -> &[CharSet] {
        &self.present_not_here
    }

    /// Lower bound on occurrences of `c` in the answer, if one is known.
    pub fn min_duplicate(&self, c: char) -> Option<usize> {
        self.min_duplicates.get(&c).copied()
    }

    pub fn has_hits(&self) -> bool {
        self.confirmed.iter().any(Option::is_some)
    }

    /// Characters known to occur somewhere in the answer: every blow
    /// character plus every confirmed one.
    pub fn must_contain(&self) -> CharSet {
        let mut set = CharSet::EMPTY;
        for &blows in &self.present_not_here {
            set |= blows;
        }
        for c in self.confirmed.iter().flatten() {
            set.insert(*c);
        }
        set
    }
}
