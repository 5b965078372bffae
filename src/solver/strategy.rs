use std::fmt;

/// Search mode for one enumeration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Scattered: every candidate uses only distinct characters. The
    /// default while the space is too wide to explore exhaustively.
    Bara,
    /// Unrestricted repetition.
    All,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Bara => write!(f, "bara"),
            Strategy::All => write!(f, "all"),
        }
    }
}
