use crate::core::record::MinimumRecord;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes records as CSV with the header `rank,row,col,x,y,z`.
pub fn write_csv<W: Write>(records: &[MinimumRecord], writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_to_path<P: AsRef<Path>>(
    records: &[MinimumRecord],
    path: P,
) -> Result<(), ReportError> {
    write_csv(records, File::create(path)?)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<MinimumRecord>, ReportError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records = rdr.deserialize().collect::<Result<Vec<MinimumRecord>, _>>()?;
    Ok(records)
}

/// Renders records as a fixed-width text table, one row per minimum.
pub fn render_table(records: &[MinimumRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>6} {:>6} {:>14} {:>14} {:>16}",
        "label", "row", "col", "x", "y", "z"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<6} {:>6} {:>6} {:>14.6} {:>14.6} {:>16.6}",
            format!("M{}", r.rank),
            r.row,
            r.col,
            r.x,
            r.y,
            r.z
        );
    }
    out
}
