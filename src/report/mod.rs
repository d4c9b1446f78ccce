pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::TOTAL_ASSIGNMENTS;
use crate::model::points::PointSignature;

/// One ranked row of the frequency table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignatureEntry {
    pub signature: PointSignature,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,

    pub n_assignments: u32,
    pub n_signatures: usize,
    pub min_total_points: u32,
    pub max_total_points: u32,

    pub level_count: u32,
    pub level_percent: f64,

    pub entries: Vec<SignatureEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Share of the 729 assignments as a percentage, rounded half away from
/// zero to one decimal.
pub fn percent_of_total(count: u32) -> f64 {
    (f64::from(count) / f64::from(TOTAL_ASSIGNMENTS) * 1000.0).round() / 10.0
}
