use crate::alphabet::CharSet;

/// Characters that may not follow `prefix` because they would only build an
/// algebraically redundant expression around a neutral element (`x+0`,
/// `x-0`, `1*x`, `x/1` and the mirrored openings).
///
/// A redundant form can never be the unique canonical answer, so cutting it
/// loses nothing; the table below encodes which extensions reach one.
pub(crate) fn identity_exclusions(prefix: &str, depth: usize) -> CharSet {
    let bytes = prefix.as_bytes();
    let Some(&last) = bytes.last() else {
        // An expression opening with '0' is either a lone-zero literal or a
        // neutral-element operand.
        return CharSet::of("0");
    };
    let n = bytes.len();

    if matches!(last, b'+' | b'-' | b'*' | b'/') {
        // An operator in the second-to-last slot leaves exactly one slot
        // for its operand; for '*' and '/' an operand of 0 or 1 is neutral.
        if n + 1 == depth && matches!(last, b'*' | b'/') {
            return CharSet::of("01");
        }
        return CharSet::of("0");
    }
    if n == 1 {
        return match last {
            b'0' => CharSet::of("+-*/"),
            b'1' => CharSet::of("*/"),
            _ => CharSet::EMPTY,
        };
    }

    let prev = bytes[n - 2];
    if last == b'1' && !prev.is_ascii_digit() {
        // a bare literal 1: following it with */ makes 1*x or 1/x, and if
        // it already sits right of */ any non-digit continuation keeps the
        // neutral *1 or /1.
        return if matches!(prev, b'*' | b'/') {
            CharSet::of("+-*/(")
        } else {
            CharSet::of("*/")
        };
    }
    if last == b'0' && !prev.is_ascii_digit() {
        return if matches!(prev, b'*' | b'/') {
            CharSet::of("+-*/")
        } else {
            CharSet::of("*/")
        };
    }
    CharSet::EMPTY
}

/// Whether closing the currently open group right now would produce a
/// redundant grouping: `(n)` around a bare number, or `(a*b)` / `(a/b)`
/// around a single product or quotient, both of which equal the same
/// expression without the parentheses.
///
/// Only called while exactly one group is open, so the last `(` is the one
/// being closed.
pub(crate) fn closes_redundant_group(prefix: &str) -> bool {
    let Some(open) = prefix.rfind('(') else {
        return false;
    };
    let tail = &prefix.as_bytes()[open + 1..];
    if tail.is_empty() {
        return false;
    }
    if tail.iter().all(u8::is_ascii_digit) {
        return true;
    }
    if let Some(k) = tail.iter().position(|&b| b == b'*' || b == b'/') {
        let (head, rest) = tail.split_at(k);
        let rest = &rest[1..];
        return !head.is_empty()
            && !rest.is_empty()
            && head.iter().all(u8::is_ascii_digit)
            && rest.iter().all(u8::is_ascii_digit);
    }
    false
}
