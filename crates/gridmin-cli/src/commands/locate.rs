use crate::cli::LocateArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use gridmin::{
    core::io::report,
    engine::{error::EngineError, extraction::Extraction, progress::ProgressReporter},
    workflows,
};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: LocateArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    let extraction = locate(&app_config, quiet)?;

    if extraction.is_empty() {
        warn!("No finite samples were available; no minima located.");
        println!("Warning: the grid holds no finite samples, no minima located.");
        return Ok(());
    }

    print!("{}", report::render_table(&extraction.minima));
    if extraction.is_exhausted() {
        println!(
            "Note: only {} of {} requested minima could be located before the grid was exhausted.",
            extraction.len(),
            extraction.requested
        );
    }

    if let Some(report_path) = &app_config.report_path {
        workflows::locate::write_report(&extraction, report_path)?;
        println!("✓ Minima written to: {}", report_path.display());
    }

    Ok(())
}

fn locate(app_config: &AppConfig, quiet: bool) -> Result<Extraction> {
    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core locate workflow on {:?}...", &app_config.input_path);
    let result =
        workflows::locate::run(&app_config.input_path, &app_config.extraction, &reporter)
            .map_err(|e| archive_failure(&app_config.input_path, e))?;
    info!(
        "Workflow finished with {} minimum/minima ({:?}).",
        result.extraction.len(),
        result.extraction.stop_reason
    );
    Ok(result.extraction)
}

/// Attributes archive failures to the input file; other engine errors pass through.
fn archive_failure(path: &Path, err: EngineError) -> CliError {
    if err.is_invalid_shape() {
        warn!("The x, y and z arrays in {:?} must all have the same 2D shape.", path);
    }
    match err {
        EngineError::Archive { source } => CliError::FileParsing {
            path: path.to_path_buf(),
            source: source.into(),
        },
        other => CliError::Engine(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ExclusionArgs;
    use gridmin::core::grid::{AxisSpec, Grid, GridError};
    use gridmin::core::io::npz::{NpzError, NpzFile};
    use gridmin::core::io::traits::GridFile;
    use gridmin::core::record::MinimumRecord;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_bowl(path: &Path) {
        let axis = AxisSpec::new(0.0, 4.0, 5).unwrap();
        let grid = Grid::sample(&axis, &axis, |x, y| (x - 3.0).powi(2) + (y - 3.0).powi(2)).unwrap();
        NpzFile::write_to_path(&grid, path).unwrap();
    }

    fn args_for(input: PathBuf, output: Option<PathBuf>) -> LocateArgs {
        LocateArgs {
            input,
            output,
            config: None,
            num_minima: Some(2),
            exclusion: ExclusionArgs {
                exclusion_radius: Some(1.5),
                ..Default::default()
            },
            set_values: vec![],
        }
    }

    #[test]
    fn locate_writes_csv_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bowl.npz");
        let output = dir.path().join("minima.csv");
        write_bowl(&input);

        run(args_for(input, Some(output.clone())), true).unwrap();

        let records: Vec<MinimumRecord> =
            report::read_csv(std::fs::File::open(&output).unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].row, records[0].col), (3, 3));
        assert_eq!(records[0].z, 0.0);
        assert!(records[1].z > 0.0);
    }

    #[test]
    fn missing_archive_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.npz");

        let err = run(args_for(input.clone(), None), true).unwrap_err();

        assert!(matches!(err, CliError::FileParsing { ref path, .. } if *path == input));
    }

    #[test]
    fn shape_mismatch_in_archive_is_attributed_to_the_file() {
        let path = Path::new("ragged.npz");
        let err = EngineError::from(NpzError::Grid(GridError::InvalidShape {
            x: (2, 3),
            y: (2, 3),
            z: (3, 3),
        }));

        let mapped = archive_failure(path, err);

        assert!(matches!(
            mapped,
            CliError::FileParsing { ref path, .. } if path == Path::new("ragged.npz")
        ));
        assert!(mapped.to_string().contains("Array shapes do not match"));
    }

    #[test]
    fn non_archive_engine_errors_pass_through() {
        let err = EngineError::InvalidParameter {
            name: "count",
            reason: "zero".to_string(),
        };

        let mapped = archive_failure(Path::new("grid.npz"), err);

        assert!(matches!(
            mapped,
            CliError::Engine(EngineError::InvalidParameter { name: "count", .. })
        ));
    }
}
