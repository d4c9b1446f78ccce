use crate::report::{ReportError, SummaryData};

pub fn render_summary_json(summary: &SummaryData) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}
