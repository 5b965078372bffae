// Configuration constants for the solver module

/// Tolerance for matching a candidate's value against the target; absorbs
/// round-off from the approximate division branch.
pub const EPSILON: f64 = 1e-3;

/// Symbol count of the untouched alphabet (digits, operators, parentheses).
pub const FULL_ALPHABET_SIZE: usize = 16;

/// Minimum live-alphabet size at which a hitless puzzle still defaults to
/// the scattered strategy. Empirical puzzle tuning, like
/// [`FULL_ALPHABET_SIZE`] above; the cutoff is reproduced, not derived.
pub const SCATTER_MIN_ALPHABET: usize = 14;

/// Smallest depth whose answers ever use a parenthesis group.
pub const PAREN_MIN_DEPTH: usize = 8;

/// Maximum count of `+ - * /` symbols permitted at each supported depth.
pub fn operator_budget(depth: usize) -> Option<usize> {
    match depth {
        5 => Some(1),
        6 => Some(2),
        8 => Some(3),
        _ => None,
    }
}
