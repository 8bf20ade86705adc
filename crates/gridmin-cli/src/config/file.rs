use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionMode {
    SpatialRadius,
    ValueBand,
    None,
}

impl FromStr for ExclusionMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spatial-radius" => Ok(Self::SpatialRadius),
            "value-band" => Ok(Self::ValueBand),
            "none" => Ok(Self::None),
            other => Err(CliError::Config(format!(
                "Unknown exclusion mode '{}'. Expected 'spatial-radius', 'value-band' or 'none'.",
                other
            ))),
        }
    }
}

impl fmt::Display for ExclusionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SpatialRadius => "spatial-radius",
            Self::ValueBand => "value-band",
            Self::None => "none",
        })
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileExtractionConfig {
    #[serde(rename = "num-minima")]
    pub num_minima: Option<usize>,
    pub mode: Option<ExclusionMode>,
    #[serde(rename = "exclusion-radius")]
    pub exclusion_radius: Option<f64>,
    #[serde(rename = "value-band")]
    pub value_band: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub extraction: Option<FileExtractionConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
