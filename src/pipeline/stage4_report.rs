use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::model::TOTAL_ASSIGNMENTS;
use crate::pipeline::stage3_aggregate::FrequencyTable;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportError, SignatureEntry, SummaryData, percent_of_total};

/// What goes to stdout: the raw signature table or the prose summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Signatures,
    Summary,
}

/// Flatten the table into rows ordered by count descending, signatures
/// descending on ties, so output order is deterministic.
pub fn ranked_entries(table: &FrequencyTable) -> Vec<SignatureEntry> {
    let mut entries: Vec<SignatureEntry> = table
        .iter()
        .map(|(&signature, &count)| SignatureEntry {
            signature,
            count,
            percent: percent_of_total(count),
        })
        .collect();
    entries.sort_by(|a, b| (b.count, b.signature).cmp(&(a.count, a.signature)));
    entries
}

pub fn build_summary(entries: &[SignatureEntry]) -> SummaryData {
    let min_total_points = entries
        .iter()
        .map(|e| e.signature.total())
        .min()
        .unwrap_or(0);
    let max_total_points = entries
        .iter()
        .map(|e| e.signature.total())
        .max()
        .unwrap_or(0);
    let level_count: u32 = entries
        .iter()
        .filter(|e| e.signature.is_level())
        .map(|e| e.count)
        .sum();

    SummaryData {
        tool_name: "group-tally".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_assignments: TOTAL_ASSIGNMENTS,
        n_signatures: entries.len(),
        min_total_points,
        max_total_points,
        level_count,
        level_percent: percent_of_total(level_count),
        entries: entries.to_vec(),
    }
}

/// Write summary.json and report.txt into the artifact directory.
pub fn write_reports(summary: &SummaryData, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json = render_summary_json(summary)?;
    fs::write(out_dir.join("summary.json"), json)?;

    let report = render_report_text(summary);
    fs::write(out_dir.join("report.txt"), report)?;

    Ok(())
}
