use crate::core::models::point::Point;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing point-set file formats.
///
/// Implementors handle format-specific parsing and serialization; the path-based helpers are
/// provided on top of the reader/writer methods.
pub trait PointFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads an ordered list of points from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Point>, Self::Error>;

    /// Writes the points, in the given order, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(points: &[Point], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads an ordered list of points from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes the points to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(points: &[Point], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(points, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
