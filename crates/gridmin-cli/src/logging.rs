use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    fmt::{self},
    prelude::*,
    registry::LookupSpan,
};

/// Target prefix shared by the core library and the `gridmin` binary.
const GRIDMIN_TARGET: &str = "gridmin";

fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `-v` raises only our own targets; dependencies (rayon, indicatif, ...) stay at WARN.
fn console_targets(level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(level.min(LevelFilter::WARN))
        .with_target(GRIDMIN_TARGET, level)
}

/// The log file always keeps per-minimum selection and masking records, even under `--quiet`.
fn file_targets(console: LevelFilter) -> Targets {
    Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(GRIDMIN_TARGET, console.max(LevelFilter::DEBUG))
}

fn file_layer<S>(file: File, console: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(file_targets(console))
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = console_level(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(console_targets(level));

    let file = log_file.map(File::create).transpose().map_err(CliError::Io)?;

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file.map(|file| file_layer(file, level)))
        .init();

    Ok(())
}
