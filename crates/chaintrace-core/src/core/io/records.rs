use crate::core::io::traits::PointFile;
use crate::core::models::point::Point;
use nalgebra::Point3;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MIN_FIELDS: usize = 5;
const DEFAULT_TAG: &str = "CA";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: RecordParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordParseErrorKind {
    #[error("Record has {found} fields, expected at least 5 (tag, id, x, y, z)")]
    MissingField { found: usize },
    #[error("Invalid float format in field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Coordinate in field '{field}' is not finite (value: '{value}')")]
    NonFiniteCoordinate { field: &'static str, value: String },
}

/// Whitespace-delimited positional records: `<tag> <id> <x> <y> <z> [ignored...]`.
///
/// The tag is the record kind and is not interpreted. Blank lines and lines starting with `#`
/// are skipped.
pub struct RecordFile;

fn parse_coordinate(value: &str, field: &'static str, line: usize) -> Result<f64, RecordError> {
    let parsed: f64 = value.parse().map_err(|_| RecordError::Parse {
        line,
        kind: RecordParseErrorKind::InvalidFloat {
            field,
            value: value.to_string(),
        },
    })?;
    if !parsed.is_finite() {
        return Err(RecordError::Parse {
            line,
            kind: RecordParseErrorKind::NonFiniteCoordinate {
                field,
                value: value.to_string(),
            },
        });
    }
    Ok(parsed)
}

impl PointFile for RecordFile {
    type Error = RecordError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Point>, Self::Error> {
        let mut points = Vec::new();
        let mut seen_ids = HashSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() < MIN_FIELDS {
                return Err(RecordError::Parse {
                    line: line_num,
                    kind: RecordParseErrorKind::MissingField {
                        found: fields.len(),
                    },
                });
            }

            let id = fields[1];
            let x = parse_coordinate(fields[2], "x", line_num)?;
            let y = parse_coordinate(fields[3], "y", line_num)?;
            let z = parse_coordinate(fields[4], "z", line_num)?;

            if !seen_ids.insert(id.to_string()) {
                return Err(RecordError::Inconsistency(format!(
                    "Duplicate point identifier '{}' on line {}",
                    id, line_num
                )));
            }

            points.push(Point::new(id, Point3::new(x, y, z)));
        }

        if points.is_empty() {
            return Err(RecordError::MissingRecord("positional records".into()));
        }
        Ok(points)
    }

    fn write_to(points: &[Point], writer: &mut impl Write) -> Result<(), Self::Error> {
        for point in points {
            writeln!(
                writer,
                "{} {} {} {} {}",
                DEFAULT_TAG, point.id, point.position.x, point.position.y, point.position.z
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(content: &str) -> Result<Vec<Point>, RecordError> {
        RecordFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_points_in_file_order() {
        let content = "CA 1 0.000 0.000 0.000\nCA 2 0.000 0.000 3.820\nCA 3 1.5 -2.25 7.64\n";
        let points = read(content).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].id, "1");
        assert_eq!(points[2].id, "3");
        assert_eq!(points[2].position, Point3::new(1.5, -2.25, 7.64));
    }

    #[test]
    fn ignores_extra_fields_blank_lines_and_comments() {
        let content = "# alpha carbons\n\nATOM 10 1.0 2.0 3.0 ALA A\n   \nATOM 11 4.0 5.0 6.0\n";
        let points = read(content).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, "10");
        assert_eq!(points[1].position, Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn accepts_leading_whitespace_and_tabs() {
        let points = read("   CA\t7\t1.0\t2.0\t3.0\n").unwrap();
        assert_eq!(points[0].id, "7");
    }

    #[test]
    fn short_record_returns_missing_field_with_line_number() {
        let err = read("CA 1 0.0 0.0 0.0\nCA 2 0.0 0.0\n").unwrap_err();
        match err {
            RecordError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, RecordParseErrorKind::MissingField { found: 4 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_coordinate_returns_invalid_float() {
        let err = read("CA 1 0.0 abc 0.0\n").unwrap_err();
        match err {
            RecordError::Parse { line, kind } => {
                assert_eq!(line, 1);
                assert_eq!(
                    kind,
                    RecordParseErrorKind::InvalidFloat {
                        field: "y",
                        value: "abc".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_and_infinite_coordinates_are_rejected() {
        let cases = [
            ("CA 1 NaN 0 0\n", "x", "NaN"),
            ("CA 1 0 0 0\nCA 2 0 inf 0\n", "y", "inf"),
            ("CA 1 0 0 -inf\n", "z", "-inf"),
        ];
        for (content, field, value) in cases {
            let err = read(content).unwrap_err();
            match err {
                RecordError::Parse { line, kind } => {
                    assert_eq!(line, content.lines().count());
                    assert_eq!(
                        kind,
                        RecordParseErrorKind::NonFiniteCoordinate {
                            field,
                            value: value.to_string()
                        }
                    );
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_identifier_is_an_inconsistency() {
        let err = read("CA 1 0.0 0.0 0.0\nCA 1 0.0 0.0 3.8\n").unwrap_err();
        assert!(matches!(err, RecordError::Inconsistency(_)));
    }

    #[test]
    fn input_without_records_is_rejected() {
        let err = read("# nothing here\n\n").unwrap_err();
        assert!(matches!(err, RecordError::MissingRecord(_)));
    }

    #[test]
    fn write_to_emits_one_record_per_point() {
        let points = vec![
            Point::from_coords("A", 0.0, 0.0, 0.0),
            Point::from_coords("B", 1.25, -2.5, 3.82),
        ];
        let mut buffer = Vec::new();
        RecordFile::write_to(&points, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "CA A 0 0 0\nCA B 1.25 -2.5 3.82\n");
    }

    #[test]
    fn path_helpers_write_and_read_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.txt");
        let points = vec![
            Point::from_coords("A", 0.0, 0.0, 0.0),
            Point::from_coords("B", 0.0, 0.0, 3.82),
        ];

        RecordFile::write_to_path(&points, &path).unwrap();
        let read_back = RecordFile::read_from_path(&path).unwrap();

        assert_eq!(read_back, points);
    }

    #[test]
    fn saved_coordinates_reload_without_rounding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reordered.txt");
        let points: Vec<Point> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let i = i as f64;
                Point::from_coords(id, 0.1 * i, -1.0 / 3.0, 3.8574 * i)
            })
            .collect();

        RecordFile::write_to_path(&points, &path).unwrap();
        let read_back = RecordFile::read_from_path(&path).unwrap();

        assert_eq!(read_back, points);
        assert_eq!(read_back[1].position.z, 3.8574);
    }

    #[test]
    fn reading_missing_file_returns_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordFile::read_from_path(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }
}
