use gridmin::engine::config::ExtractionConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub extraction: ExtractionConfig,
}
