use super::traits::GridFile;
use crate::core::grid::{Grid, GridError};
use ndarray::Array2;
use ndarray_npy::{NpzReader, NpzWriter, ReadNpzError, WriteNpzError};
use std::io::{self, Read, Seek, Write};
use thiserror::Error;
use tracing::{debug, trace};

pub const X_KEY: &str = "x";
pub const Y_KEY: &str = "y";
pub const Z_KEY: &str = "z";

#[derive(Debug, Error)]
pub enum NpzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read archive: {0}")]
    Read(#[from] ReadNpzError),

    #[error("Failed to write archive: {0}")]
    Write(#[from] WriteNpzError),

    #[error("Array '{key}' not found in archive (available: {available:?})")]
    MissingArray {
        key: &'static str,
        available: Vec<String>,
    },

    #[error("Archive arrays do not form a valid grid: {0}")]
    Grid(#[from] GridError),
}

/// NumPy `.npz` bundle holding the `x`, `y` and `z` arrays of a grid as 2D `f64` arrays.
pub struct NpzFile;

impl GridFile for NpzFile {
    type Error = NpzError;

    fn read_from<R: Read + Seek>(reader: R) -> Result<Grid, Self::Error> {
        let mut npz = NpzReader::new(reader)?;
        let names = npz.names()?;
        trace!("Archive entries: {:?}", names);

        let x: Array2<f64> = npz.by_name(&resolve_entry(&names, X_KEY)?)?;
        let y: Array2<f64> = npz.by_name(&resolve_entry(&names, Y_KEY)?)?;
        let z: Array2<f64> = npz.by_name(&resolve_entry(&names, Z_KEY)?)?;

        debug!("Read grid arrays with shape {:?}", z.dim());
        Ok(Grid::new(x, y, z)?)
    }

    fn write_to<W: Write + Seek>(grid: &Grid, writer: W) -> Result<(), Self::Error> {
        let mut npz = NpzWriter::new_compressed(writer);
        npz.add_array(X_KEY, grid.x())?;
        npz.add_array(Y_KEY, grid.y())?;
        npz.add_array(Z_KEY, grid.z())?;
        let mut inner = npz.finish()?;
        inner.flush()?;

        debug!("Wrote grid arrays with shape {:?}", grid.shape());
        Ok(())
    }
}

/// Finds the archive entry for `key`, accepting `key`, `key.npy` and nested `dir/key.npy`.
fn resolve_entry(names: &[String], key: &'static str) -> Result<String, NpzError> {
    let with_ext = format!("{key}.npy");

    if let Some(name) = names.iter().find(|n| *n == key || **n == with_ext) {
        return Ok(name.clone());
    }

    names
        .iter()
        .find(|n| {
            let base = n.rsplit('/').next().unwrap_or(n.as_str());
            base.strip_suffix(".npy").unwrap_or(base) == key
        })
        .cloned()
        .ok_or_else(|| NpzError::MissingArray {
            key,
            available: names.to_vec(),
        })
}
