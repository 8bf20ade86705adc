use crate::core::grid::Grid;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

/// Defines the interface for reading and writing grid archive formats.
///
/// Implementors handle format-specific parsing and serialization; the path-based helpers
/// take care of opening and buffering files.
pub trait GridFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a grid from a seekable reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the arrays are missing, or their shapes disagree.
    fn read_from<R: Read + Seek>(reader: R) -> Result<Grid, Self::Error>;

    /// Writes a grid to a seekable writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying I/O fails.
    fn write_to<W: Write + Seek>(grid: &Grid, writer: W) -> Result<(), Self::Error>;

    /// Reads a grid from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Grid, Self::Error> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Writes a grid to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        Self::write_to(grid, BufWriter::new(file))
    }
}
