use super::config::ConfigError;
use crate::core::grid::GridError;
use crate::core::io::npz::NpzError;
use crate::core::io::report::ReportError;
use crate::core::surfaces::SurfaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Grid archive error: {source}")]
    Archive {
        #[from]
        source: NpzError,
    },

    #[error("Report error: {source}")]
    Report {
        #[from]
        source: ReportError,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl EngineError {
    /// True when the failure stems from arrays of inconsistent shape, whether raised while
    /// building a grid directly or while loading one from an archive.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(
            self,
            EngineError::Grid(GridError::InvalidShape { .. })
                | EngineError::Archive {
                    source: NpzError::Grid(GridError::InvalidShape { .. })
                }
        )
    }
}
