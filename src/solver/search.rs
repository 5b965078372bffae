use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use rayon::prelude::*;

use crate::alphabet::{CharSet, DIGITS, OPERATORS, is_operator};
use crate::expression::evaluate;
use crate::feedback::Feedback;
use crate::solver::constants::EPSILON;
use crate::solver::prune::{closes_redundant_group, identity_exclusions};
use crate::solver::strategy::Strategy;

/// One depth-first enumeration pass over fixed-length candidate strings.
///
/// The search owns nothing mutable besides a node counter; every recursive
/// branch appends into its own buffer, and the top level concatenates the
/// buffers in branch order so results are deterministic regardless of how
/// rayon schedules the position-0 subtrees.
pub(crate) struct Enumeration<'a> {
    feedback: &'a Feedback,
    alphabet: CharSet,
    must_contain: CharSet,
    strategy: Strategy,
    allow_identities: bool,
    node_limit: Option<u64>,
    nodes: AtomicU64,
}

impl<'a> Enumeration<'a> {
    pub(crate) fn new(
        feedback: &'a Feedback,
        alphabet: CharSet,
        strategy: Strategy,
        allow_identities: bool,
        node_limit: Option<u64>,
    ) -> Self {
        Self {
            feedback,
            alphabet,
            must_contain: feedback.must_contain(),
            strategy,
            allow_identities,
            node_limit,
            nodes: AtomicU64::new(0),
        }
    }

    /// Enumerate every candidate using at most `budget` operators,
    /// fork-joining across the choice of first character.
    pub(crate) fn run(&self, budget: usize) -> Vec<String> {
        let depth = self.feedback.depth();
        if self.feedback.stage() == 0 && depth < 2 * budget {
            return Vec::new();
        }
        let Some(first) = self.next_chars("", depth, budget) else {
            return Vec::new();
        };

        let branches: Vec<char> = first.iter().collect();
        let found: Vec<String> = branches
            .into_par_iter()
            .map(|c| {
                let mut prefix = String::with_capacity(depth);
                prefix.push(c);
                let next_budget = if is_operator(c) { budget - 1 } else { budget };
                let mut found = Vec::new();
                self.descend(depth - 1, next_budget, &mut prefix, &mut found);
                found
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        debug!("Budget {}: {} candidates survived", budget, found.len());
        found
    }

    fn descend(&self, remaining: usize, budget: usize, prefix: &mut String, found: &mut Vec<String>) {
        if self.out_of_nodes() {
            return;
        }
        if remaining == 0 {
            self.finish(prefix, budget, found);
            return;
        }
        // At stage 0 every budgeted operator must still fit with an operand.
        if self.feedback.stage() == 0 && remaining < 2 * budget {
            return;
        }
        let Some(choices) = self.next_chars(prefix, remaining, budget) else {
            return;
        };
        for c in choices.iter() {
            let next_budget = if is_operator(c) { budget - 1 } else { budget };
            prefix.push(c);
            self.descend(remaining - 1, next_budget, prefix, found);
            prefix.pop();
        }
    }

    /// The character set admissible at the next position, or `None` when
    /// the whole branch is dead.
    ///
    /// The structural rules mirror the grammar one character ahead; the
    /// later subtractions apply even to a position forced by a confirmed
    /// hit, so a hit that breaks another constraint kills the branch.
    fn next_chars(&self, prefix: &str, remaining: usize, budget: usize) -> Option<CharSet> {
        let depth = self.feedback.depth();
        let position = prefix.len();
        let bytes = prefix.as_bytes();
        let last = bytes.last().copied();
        let prev_is_digit = bytes.len() >= 2 && bytes[bytes.len() - 2].is_ascii_digit();

        let mut choices = if let Some(c) = self.feedback.confirmed()[position] {
            CharSet::single(c)
        } else if bytes.len() >= 2 && last == Some(b'/') {
            // a divisor may not open with an operator, close the group, or
            // start a zero literal
            self.alphabet - CharSet::of("+-*/)0")
        } else if last.is_none() || matches!(last, Some(b'+' | b'-' | b'*' | b'/' | b'(')) {
            // an operand position: no operator, no closing an unopened group
            self.alphabet - CharSet::of("+-*/)")
        } else if (last == Some(b'0') && !prev_is_digit) || last == Some(b')') {
            // no digit may extend a bare zero or follow a closed group
            self.alphabet - DIGITS
        } else if remaining == 1 {
            // the final character must complete the expression
            self.alphabet - CharSet::of("+-*/(")
        } else {
            self.alphabet
        };

        if self.strategy == Strategy::Bara {
            choices -= CharSet::of(prefix);
        }

        if self.feedback.stage() >= 1 && !self.allow_identities {
            choices -= identity_exclusions(prefix, depth);
            if prefix.contains('(') && !prefix.contains(')') {
                if remaining == 1 && prefix.starts_with('(') {
                    // a lone open group cannot be closed and filled in one
                    // more character
                    return None;
                }
                if closes_redundant_group(prefix) {
                    choices.remove(')');
                }
            }
        }

        choices -= self.feedback.present_not_here()[position];

        // at most one parenthesis group per candidate
        if prefix.contains('(') {
            choices.remove('(');
            if prefix.contains(')') {
                choices.remove(')');
            }
        } else {
            choices.remove(')');
        }

        if budget == 0 {
            choices -= OPERATORS;
        }

        Some(choices)
    }

    fn finish(&self, candidate: &str, budget_left: usize, found: &mut Vec<String>) {
        // every character known to be in the answer must appear
        if !self.must_contain.is_subset(CharSet::of(candidate)) {
            return;
        }
        // first guesses explore only maximally complex expressions
        if self.feedback.stage() < 1 && budget_left > 0 {
            return;
        }
        // a candidate that fails to parse is rejected, never fatal
        if let Ok(value) = evaluate(candidate)
            && value.approx_eq(self.feedback.target(), EPSILON)
        {
            found.push(candidate.to_string());
        }
    }

    fn out_of_nodes(&self) -> bool {
        let Some(limit) = self.node_limit else {
            return false;
        };
        let visited = self.nodes.fetch_add(1, Ordering::Relaxed);
        if visited == limit {
            warn!("Node limit {} reached, truncating search", limit);
        }
        visited >= limit
    }
}
