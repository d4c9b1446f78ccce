use std::collections::BTreeMap;

use crate::model::TOTAL_ASSIGNMENTS;
use crate::model::points::PointSignature;
use crate::pipeline::stage1_enumerate::enumerate_assignments;
use crate::pipeline::stage2_score::score_assignment;

/// Signature -> number of assignments producing it. Only achievable
/// signatures appear; no zero-count entries.
pub type FrequencyTable = BTreeMap<PointSignature, u32>;

/// Tally every enumerated assignment by its point signature. A shortfall
/// against the expected 729 would be a defect in the enumerator, not a
/// runtime condition.
pub fn build_frequency_table() -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let mut seen = 0u32;
    for assignment in enumerate_assignments() {
        let signature = PointSignature::from_scores(score_assignment(&assignment));
        *table.entry(signature).or_insert(0) += 1;
        seen += 1;
    }
    debug_assert_eq!(seen, TOTAL_ASSIGNMENTS);
    table
}
