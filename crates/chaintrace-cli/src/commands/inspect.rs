use crate::cli::InspectArgs;
use crate::config::{OutputOverrides, PartialTraceConfig};
use crate::error::{CliError, Result};
use chaintrace::{
    core::io::{records::RecordFile, traits::PointFile},
    workflows::{self, inspect::InspectionReport},
};
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: InspectArgs) -> Result<()> {
    let partial_config = PartialTraceConfig::load(args.window.config.as_deref())?;
    let final_config = partial_config.merge_with_cli(&args.window, OutputOverrides::default())?;

    info!("Loading input records from {:?}", &args.input);
    let points = RecordFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let report = workflows::inspect::run(points, &final_config.core_config);
    if !report.looks_like_simple_chain() {
        warn!(
            "Input does not look like a single unbranched chain; a trace is likely to fail."
        );
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render(&report, &mut handle)?;
    handle.flush()?;
    Ok(())
}

fn render(report: &InspectionReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{:<12} {:>6}", "id", "degree")?;
    for entry in &report.degrees {
        writeln!(writer, "{:<12} {:>6}", entry.id, entry.degree)?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Endpoint candidates: {}",
        join_or_none(&report.endpoint_candidates())
    )?;
    writeln!(
        writer,
        "Branch points: {}",
        join_or_none(&report.branch_points())
    )?;
    Ok(())
}

fn join_or_none(ids: &[&str]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}
