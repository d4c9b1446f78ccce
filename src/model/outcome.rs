use crate::model::N_MATCHES;

/// Result of one fixture relative to its home side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Enumeration order; lexicographic walks follow this.
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Draw, Outcome::Loss];
}

/// One full set of results for the six fixtures, in canonical fixture order.
pub type Assignment = [Outcome; N_MATCHES];
