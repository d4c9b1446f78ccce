use serde::Serialize;

use crate::model::N_TEAMS;

/// Per-team point totals indexed by original team index 0-3.
pub type ScoreVector = [u8; N_TEAMS];

/// Point totals sorted descending. Drops which team earned which total,
/// which is what makes it usable as the aggregation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PointSignature([u8; N_TEAMS]);

impl PointSignature {
    pub fn from_scores(scores: ScoreVector) -> Self {
        let mut sorted = scores;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        PointSignature(sorted)
    }

    pub fn points(&self) -> [u8; N_TEAMS] {
        self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&p| u32::from(p)).sum()
    }

    /// True when all four teams finished on the same total.
    pub fn is_level(&self) -> bool {
        self.0.iter().all(|&p| p == self.0[0])
    }
}

impl std::fmt::Display for PointSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.points();
        write!(f, "{a} {b} {c} {d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_sorts_descending() {
        let sig = PointSignature::from_scores([3, 9, 0, 6]);
        assert_eq!(sig.points(), [9, 6, 3, 0]);
    }

    #[test]
    fn test_total_and_level() {
        let sig = PointSignature::from_scores([3, 3, 3, 3]);
        assert_eq!(sig.total(), 12);
        assert!(sig.is_level());
        assert!(!PointSignature::from_scores([9, 6, 3, 0]).is_level());
    }

    #[test]
    fn test_display() {
        let sig = PointSignature::from_scores([0, 3, 6, 9]);
        assert_eq!(sig.to_string(), "9 6 3 0");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = PointSignature::from_scores([7, 4, 4, 1]);
        let b = PointSignature::from_scores([6, 4, 4, 3]);
        assert!(a > b);
    }
}
