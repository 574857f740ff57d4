use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

const TEXT_HEADER: &str = "Order of alpha-carbon atoms:";
const TEXT_FOOTER: &str = "Total number of alpha-carbon atoms:";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// Layout of a recovered-order report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// A header line, one identifier per line, and a closing total-count line.
    #[default]
    Text,
    /// A `step,id` table with 1-based step numbers.
    Csv,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!(
                "Unknown report format '{}'. Expected 'text' or 'csv'.",
                other
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Writes the recovered order in the requested format.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_report(
    order: &[String],
    format: ReportFormat,
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => write_text(order, writer),
        ReportFormat::Csv => write_csv(order, writer),
    }
}

fn write_text(order: &[String], writer: &mut impl Write) -> Result<(), ReportError> {
    writeln!(writer, "{}", TEXT_HEADER)?;
    for id in order {
        writeln!(writer, "{}", id)?;
    }
    writeln!(writer, "{} {}", TEXT_FOOTER, order.len())?;
    Ok(())
}

fn write_csv(order: &[String], writer: &mut impl Write) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["step", "id"])?;
    for (i, id) in order.iter().enumerate() {
        csv_writer.write_record([(i + 1).to_string().as_str(), id.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Vec<String> {
        vec!["D".to_string(), "C".to_string(), "B".to_string(), "A".to_string()]
    }

    fn render(format: ReportFormat) -> String {
        let mut buffer = Vec::new();
        write_report(&order(), format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn text_report_lists_ids_and_total() {
        let expected = "Order of alpha-carbon atoms:\nD\nC\nB\nA\nTotal number of alpha-carbon atoms: 4\n";
        assert_eq!(render(ReportFormat::Text), expected);
    }

    #[test]
    fn csv_report_numbers_steps_from_one() {
        let expected = "step,id\n1,D\n2,C\n3,B\n4,A\n";
        assert_eq!(render(ReportFormat::Csv), expected);
    }

    #[test]
    fn text_report_for_empty_order_still_has_total() {
        let mut buffer = Vec::new();
        write_report(&[], ReportFormat::Text, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("Total number of alpha-carbon atoms: 0\n"));
    }

    #[test]
    fn report_format_parses_case_insensitively() {
        assert_eq!("TEXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!(" csv ".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert!("json".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn report_format_display_round_trips_through_from_str() {
        for format in [ReportFormat::Text, ReportFormat::Csv] {
            assert_eq!(format.to_string().parse::<ReportFormat>(), Ok(format));
        }
    }
}
