use crate::core::grid::Grid;
use crate::core::io::npz::NpzFile;
use crate::core::io::report;
use crate::core::io::traits::GridFile;
use crate::engine::config::ExtractionConfig;
use crate::engine::error::EngineError;
use crate::engine::extraction::{Extraction, extract_with_progress};
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct LocateResult {
    pub grid: Grid,
    pub extraction: Extraction,
}

#[instrument(skip_all, name = "locate_workflow", fields(input = %input.as_ref().display()))]
pub fn run<P: AsRef<Path>>(
    input: P,
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<LocateResult, EngineError> {
    config.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Loading grid",
    });
    let grid = NpzFile::read_from_path(input.as_ref())?;
    let (rows, cols) = grid.shape();
    info!(
        "Loaded {}x{} grid with {} finite sample(s).",
        rows,
        cols,
        grid.finite_count()
    );
    if let Some((lowest, highest)) = grid.value_range() {
        debug!("Finite field values span [{}, {}].", lowest, highest);
    }
    reporter.report(Progress::PhaseFinish);

    let extraction = run_on_grid(&grid, config, reporter)?;
    Ok(LocateResult { grid, extraction })
}

/// Extracts minima from an in-memory grid.
pub fn run_on_grid(
    grid: &Grid,
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<Extraction, EngineError> {
    config.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Extracting minima",
    });
    match &config.policy {
        Some(policy) => info!(
            "Extracting up to {} minima with {} exclusion.",
            config.num_minima, policy
        ),
        None => info!(
            "Extracting the {} lowest samples without exclusion.",
            config.num_minima
        ),
    }

    let extraction = extract_with_progress(grid, config.num_minima, config.policy, reporter)?;
    reporter.report(Progress::PhaseFinish);

    info!("Located {} minimum/minima.", extraction.len());
    Ok(extraction)
}

pub fn write_report<P: AsRef<Path>>(extraction: &Extraction, path: P) -> Result<(), EngineError> {
    report::write_csv_to_path(&extraction.minima, path.as_ref())?;
    info!("Wrote minima report to {}", path.as_ref().display());
    Ok(())
}
