use crate::report::{SignatureEntry, SummaryData};

/// The machine-facing stdout table: one row per signature, then the
/// distinct-signature count on its own final line.
pub fn render_signature_table(entries: &[SignatureEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{} {} {:.1}\n",
            entry.signature, entry.count, entry.percent
        ));
    }
    out.push_str(&format!("{}\n", entries.len()));
    out
}

pub fn render_report_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Group Stage Point Signature Report\n");
    out.push_str("==================================\n\n");

    out.push_str("1. Enumeration\n");
    out.push_str(&format!(
        "Outcome assignments: {}\n",
        summary.n_assignments
    ));
    out.push_str(&format!(
        "Distinct point signatures: {}\n",
        summary.n_signatures
    ));
    out.push_str(&format!(
        "Total points range: {}..{}\n\n",
        summary.min_total_points, summary.max_total_points
    ));

    out.push_str("2. Leading signatures\n");
    for entry in summary.entries.iter().take(5) {
        out.push_str(&format!(
            "{}: {} assignments ({:.1}%)\n",
            entry.signature, entry.count, entry.percent
        ));
    }
    out.push('\n');

    out.push_str("3. Level groups\n");
    out.push_str(&format!(
        "All four teams level: {} assignments ({:.1}%)\n",
        summary.level_count, summary.level_percent
    ));

    out
}
