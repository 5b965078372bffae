//! The fixed 16-symbol puzzle alphabet and a small set type over it.

/// Every symbol a candidate may contain, in canonical order.
///
/// The order matters: enumeration and ranking iterate sets in this order,
/// which is what keeps solver output deterministic across runs.
pub const ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '(', ')',
];

const fn symbol_bit(b: u8) -> u16 {
    match b {
        b'0'..=b'9' => 1 << (b - b'0'),
        b'+' => 1 << 10,
        b'-' => 1 << 11,
        b'*' => 1 << 12,
        b'/' => 1 << 13,
        b'(' => 1 << 14,
        b')' => 1 << 15,
        _ => 0,
    }
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Set of alphabet symbols backed by a `u16` bitmask.
///
/// Characters outside the alphabet are silently ignored on insertion and
/// never reported as members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharSet(u16);

pub const DIGITS: CharSet = CharSet::of("0123456789");
pub const OPERATORS: CharSet = CharSet::of("+-*/");
pub const PARENS: CharSet = CharSet::of("()");

impl CharSet {
    pub const EMPTY: CharSet = CharSet(0);

    pub const fn full() -> CharSet {
        CharSet(0xFFFF)
    }

    /// Set containing every alphabet symbol occurring in `s`.
    pub const fn of(s: &str) -> CharSet {
        let bytes = s.as_bytes();
        let mut mask = 0u16;
        let mut i = 0;
        while i < bytes.len() {
            mask |= symbol_bit(bytes[i]);
            i += 1;
        }
        CharSet(mask)
    }

    pub fn single(c: char) -> CharSet {
        if c.is_ascii() {
            CharSet(symbol_bit(c as u8))
        } else {
            CharSet::EMPTY
        }
    }

    pub fn insert(&mut self, c: char) {
        *self |= CharSet::single(c);
    }

    pub fn remove(&mut self, c: char) {
        *self -= CharSet::single(c);
    }

    pub fn contains(self, c: char) -> bool {
        let bit = CharSet::single(c).0;
        bit != 0 && self.0 & bit != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every member of `self` is also in `other`.
    pub const fn is_subset(self, other: CharSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// Members in canonical [`ALPHABET`] order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        ALPHABET.into_iter().filter(move |&c| self.contains(c))
    }
}

impl std::ops::Sub for CharSet {
    type Output = CharSet;

    fn sub(self, rhs: CharSet) -> CharSet {
        CharSet(self.0 & !rhs.0)
    }
}

impl std::ops::SubAssign for CharSet {
    fn sub_assign(&mut self, rhs: CharSet) {
        self.0 &= !rhs.0;
    }
}

impl std::ops::BitOr for CharSet {
    type Output = CharSet;

    fn bitor(self, rhs: CharSet) -> CharSet {
        CharSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CharSet {
    fn bitor_assign(&mut self, rhs: CharSet) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for CharSet {
    type Output = CharSet;

    fn bitand(self, rhs: CharSet) -> CharSet {
        CharSet(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_covers_alphabet() {
        let full = CharSet::full();
        assert_eq!(full.len(), 16);
        for c in ALPHABET {
            assert!(full.contains(c));
        }
        assert_eq!(DIGITS | OPERATORS | PARENS, full);
    }

    #[test]
    fn test_of_and_contains() {
        let set = CharSet::of("12+(");
        assert_eq!(set.len(), 4);
        assert!(set.contains('1'));
        assert!(set.contains('+'));
        assert!(!set.contains('3'));
        assert!(!set.contains(')'));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(CharSet::of("1111"), CharSet::of("1"));
        assert_eq!(CharSet::of("1111").len(), 1);
    }

    #[test]
    fn test_non_alphabet_chars_ignored() {
        assert!(CharSet::of("a b").is_empty());
        let mut set = CharSet::EMPTY;
        set.insert('x');
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_operations() {
        let a = CharSet::of("123+");
        let b = CharSet::of("3+/");
        assert_eq!(a - b, CharSet::of("12"));
        assert_eq!(a | b, CharSet::of("123+/"));
        assert_eq!(a & b, CharSet::of("3+"));
        assert!(CharSet::of("12").is_subset(a));
        assert!(!a.is_subset(b));
        assert!(CharSet::EMPTY.is_subset(b));
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let set = CharSet::of(")9+1(");
        let collected: Vec<char> = set.iter().collect();
        assert_eq!(collected, vec!['1', '9', '+', '(', ')']);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = CharSet::of("5*");
        set.insert('7');
        set.remove('*');
        assert_eq!(set, CharSet::of("57"));
        set.remove('*'); // removing an absent member is a no-op
        assert_eq!(set, CharSet::of("57"));
    }

    #[test]
    fn test_is_operator() {
        for c in "+-*/".chars() {
            assert!(is_operator(c));
        }
        for c in "09()".chars() {
            assert!(!is_operator(c));
        }
    }
}
