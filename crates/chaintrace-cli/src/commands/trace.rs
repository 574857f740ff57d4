use crate::cli::TraceArgs;
use crate::config::{OutputOverrides, PartialTraceConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use chaintrace::{
    core::io::{records::RecordFile, report, traits::PointFile},
    engine::progress::ProgressReporter,
    workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: TraceArgs) -> Result<()> {
    let partial_config = PartialTraceConfig::load(args.window.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(
        &args.window,
        OutputOverrides {
            format: args.format,
            front_to_back: args.front_to_back_override(),
        },
    )?;

    info!("Loading input records from {:?}", &args.input);
    let points = RecordFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    info!("Parsed {} point(s).", points.len());

    let reporter = if args.no_progress {
        ProgressReporter::new()
    } else {
        let progress_handler = CliProgressHandler::new();
        ProgressReporter::with_callback(progress_handler.get_callback())
    };

    info!("Invoking the core trace workflow...");
    let result = workflows::trace::run(points, &final_config.core_config, &reporter)?;

    let order = if final_config.front_to_back {
        result.front_to_back()
    } else {
        result.order
    };

    match &args.output {
        Some(path) => {
            write_to_file(&order, final_config.format, path)?;
            info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            report::write_report(&order, final_config.format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn write_to_file(order: &[String], format: report::ReportFormat, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    report::write_report(order, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use chaintrace::engine::error::EngineError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const CHAIN: &str = "\
# four residues, listed front to back
CA A 0.000 0.000 0.000
CA B 0.000 0.000 3.820
CA C 0.000 0.000 7.640
CA D 0.000 0.000 11.460
";

    fn trace_args(args: &[&str]) -> TraceArgs {
        let mut argv = vec!["chaintrace", "trace", "--no-progress"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Commands::Trace(trace_args) => trace_args,
            _ => panic!("Expected 'trace' subcommand"),
        }
    }

    fn setup(content: &str) -> (TempDir, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chain.txt");
        fs::write(&input, content).unwrap();
        let output = dir.path().join("order.txt");
        (
            dir,
            input.to_string_lossy().into_owned(),
            output.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn writes_text_report_in_discovery_order() {
        let (_dir, input, output) = setup(CHAIN);

        run(trace_args(&["-i", &input, "-o", &output])).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Order of alpha-carbon atoms:",
                "D",
                "C",
                "B",
                "A",
                "Total number of alpha-carbon atoms: 4",
            ]
        );
    }

    #[test]
    fn front_to_back_csv_report() {
        let (_dir, input, output) = setup(CHAIN);

        run(trace_args(&[
            "-i",
            &input,
            "-o",
            &output,
            "-f",
            "csv",
            "--front-to-back",
        ]))
        .unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(report, "step,id\n1,A\n2,B\n3,C\n4,D\n");
    }

    #[test]
    fn unparsable_input_reports_the_offending_path() {
        let (_dir, input, output) = setup("CA A 0.0 0.0\n");

        let err = run(trace_args(&["-i", &input, "-o", &output])).unwrap_err();

        match err {
            CliError::FileParsing { path, .. } => assert_eq!(path.to_string_lossy(), input),
            other => panic!("Expected FileParsing error, got {other:?}"),
        }
        assert!(!Path::new(&output).exists());
    }

    #[test]
    fn nan_record_stops_the_trace_before_any_peeling() {
        let content = format!("{CHAIN}CA X NaN 0.000 0.000\n");
        let (_dir, input, output) = setup(&content);

        let err = run(trace_args(&["-i", &input, "-o", &output])).unwrap_err();

        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(!Path::new(&output).exists());
    }

    #[test]
    fn too_few_points_is_an_engine_error() {
        let (_dir, input, output) = setup("CA A 0 0 0\nCA B 0 0 3.82\n");

        let err = run(trace_args(&["-i", &input, "-o", &output])).unwrap_err();

        assert!(matches!(
            err,
            CliError::Engine(EngineError::DegenerateInput { count: 2 })
        ));
    }
}
