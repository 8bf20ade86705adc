use crate::cli::SampleArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use gridmin::{
    core::surfaces::SurfaceKind,
    engine::progress::ProgressReporter,
    workflows::sample::{self, SampleRequest},
};
use tracing::info;

pub fn run(args: SampleArgs, quiet: bool) -> Result<()> {
    let surface = args
        .surface
        .parse::<SurfaceKind>()
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let request = SampleRequest {
        surface,
        x_axis: args.x_range,
        y_axis: args.y_range,
    };

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core sample workflow...");
    let grid = sample::run_to_path(&request, &args.output, &reporter)?;

    let (rows, cols) = grid.shape();
    println!(
        "✓ Sampled {} on a {}x{} grid, written to: {}",
        surface,
        rows,
        cols,
        args.output.display()
    );
    Ok(())
}
