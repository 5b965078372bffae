use crate::alphabet::{CharSet, OPERATORS};

/// Operators in preference order with their priority weights.
const OPERATOR_WEIGHTS: [(char, usize); 4] = [('*', 4), ('+', 3), ('/', 2), ('-', 1)];

/// Order `candidates` ascending by the composite weight, best guess first.
///
/// The weight favors candidates that are maximally informative and
/// minimally redundant against the rest of the pool; all five components
/// are derived from pool-wide statistics, so the order is deterministic
/// for a fixed candidate set.
pub(crate) fn rank(mut candidates: Vec<String>, depth: usize) -> Vec<String> {
    let stats = PoolStats::collect(&candidates, depth);
    candidates.sort_by_cached_key(|candidate| stats.weight(candidate));
    candidates
}

/// Digit occurrence statistics over one surviving candidate pool.
pub(crate) struct PoolStats {
    /// Candidates containing each digit at least once.
    containing: [usize; 10],
    /// Candidates holding each digit at each position.
    positional: Vec<[usize; 10]>,
}

impl PoolStats {
    pub(crate) fn collect(candidates: &[String], depth: usize) -> Self {
        let mut containing = [0usize; 10];
        let mut positional = vec![[0usize; 10]; depth];
        for candidate in candidates {
            let symbols = CharSet::of(candidate);
            for d in 0..10u8 {
                if symbols.contains((b'0' + d) as char) {
                    containing[d as usize] += 1;
                }
            }
            for (i, b) in candidate.bytes().enumerate() {
                if b.is_ascii_digit() {
                    positional[i][(b - b'0') as usize] += 1;
                }
            }
        }
        Self { containing, positional }
    }

    /// The five-part ascending sort key:
    /// distinct symbols excluding `)`, distinct operators, operator
    /// priority, digits shared with other candidates, digits shared
    /// position-for-position with other candidates.
    pub(crate) fn weight(&self, candidate: &str) -> (usize, usize, usize, usize, usize) {
        let symbols = CharSet::of(candidate);

        let distinct_symbols = (symbols - CharSet::of(")")).len();
        let distinct_operators = (symbols & OPERATORS).len();

        let mut operator_priority = 0;
        for (op, priority) in OPERATOR_WEIGHTS {
            if symbols.contains(op) {
                operator_priority += priority;
            }
        }

        let mut global_digit_frequency = 0;
        for d in 0..10u8 {
            if symbols.contains((b'0' + d) as char) {
                // candidates other than this one sharing the digit
                global_digit_frequency += self.containing[d as usize].saturating_sub(1);
            }
        }

        let mut positional_digit_frequency = 0;
        for (i, b) in candidate.bytes().enumerate() {
            if b.is_ascii_digit() {
                positional_digit_frequency += self.positional[i][(b - b'0') as usize];
            }
        }

        (
            distinct_symbols,
            distinct_operators,
            operator_priority,
            global_digit_frequency,
            positional_digit_frequency,
        )
    }
}
