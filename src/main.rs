mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::pipeline::stage3_aggregate::build_frequency_table;
use crate::pipeline::stage4_report::{
    ReportMode, build_summary, ranked_entries, write_reports,
};
use crate::report::ReportError;
use crate::report::text::{render_report_text, render_signature_table};

#[derive(Debug, Parser)]
#[command(
    name = "group-tally",
    version,
    about = "Enumerates every outcome of a four-team round-robin group and tallies point-signature frequencies"
)]
struct Cli {
    /// Stdout rendering: raw signature table or prose summary
    #[arg(long, value_enum, default_value = "signatures")]
    mode: ReportMode,

    /// Directory to write summary.json and report.txt into
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ReportError> {
    let cli = Cli::parse();

    let table = build_frequency_table();
    let entries = ranked_entries(&table);
    let summary = build_summary(&entries);
    info!(
        assignments = summary.n_assignments,
        signatures = summary.n_signatures,
        "enumeration complete"
    );

    match cli.mode {
        ReportMode::Signatures => print!("{}", render_signature_table(&entries)),
        ReportMode::Summary => print!("{}", render_report_text(&summary)),
    }

    if let Some(out_dir) = &cli.out {
        write_reports(&summary, out_dir)?;
        info!(dir = %out_dir.display(), "wrote report artifacts");
    }

    Ok(())
}
