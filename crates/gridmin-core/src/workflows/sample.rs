use crate::core::grid::{AxisSpec, Grid};
use crate::core::io::npz::NpzFile;
use crate::core::io::traits::GridFile;
use crate::core::surfaces::{DEFAULT_POINTS_PER_AXIS, Objective, Surface, SurfaceKind};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRequest {
    pub surface: SurfaceKind,
    /// Falls back to the surface's domain with [`DEFAULT_POINTS_PER_AXIS`] points.
    pub x_axis: Option<AxisSpec>,
    pub y_axis: Option<AxisSpec>,
}

impl SampleRequest {
    pub fn new(surface: SurfaceKind) -> Self {
        Self {
            surface,
            x_axis: None,
            y_axis: None,
        }
    }

    pub fn resolve_axes(&self) -> Result<(AxisSpec, AxisSpec), EngineError> {
        let domain = self.surface.surface().domain();
        let x_axis = match self.x_axis {
            Some(axis) => axis,
            None => domain.x_axis(DEFAULT_POINTS_PER_AXIS)?,
        };
        let y_axis = match self.y_axis {
            Some(axis) => axis,
            None => domain.y_axis(DEFAULT_POINTS_PER_AXIS)?,
        };
        Ok((x_axis, y_axis))
    }
}

#[instrument(skip_all, name = "sample_workflow", fields(surface = %request.surface))]
pub fn run(request: &SampleRequest, reporter: &ProgressReporter) -> Result<Grid, EngineError> {
    let (x_axis, y_axis) = request.resolve_axes()?;

    reporter.report(Progress::PhaseStart {
        name: "Sampling surface",
    });
    info!(
        "Sampling {} on x in [{}, {}] ({} pts), y in [{}, {}] ({} pts).",
        request.surface,
        x_axis.start,
        x_axis.stop,
        x_axis.num,
        y_axis.start,
        y_axis.stop,
        y_axis.num
    );
    let objective = Objective::new(request.surface.surface());
    let grid = objective.sample(&x_axis, &y_axis)?;
    reporter.report(Progress::PhaseFinish);
    debug!(
        "{} function evaluations for a {}x{} grid.",
        objective.evaluation_counts().function_evals,
        x_axis.num,
        y_axis.num
    );

    Ok(grid)
}

pub fn run_to_path<P: AsRef<Path>>(
    request: &SampleRequest,
    output: P,
    reporter: &ProgressReporter,
) -> Result<Grid, EngineError> {
    let grid = run(request, reporter)?;

    reporter.report(Progress::PhaseStart {
        name: "Writing archive",
    });
    NpzFile::write_to_path(&grid, output.as_ref())?;
    reporter.report(Progress::PhaseFinish);

    info!("Wrote grid archive to {}", output.as_ref().display());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_axes_follow_the_surface_domain() {
        let request = SampleRequest::new(SurfaceKind::Branin);
        let (x_axis, y_axis) = request.resolve_axes().unwrap();

        assert_eq!((x_axis.start, x_axis.stop), (-5.0, 18.0));
        assert_eq!((y_axis.start, y_axis.stop), (-5.0, 20.0));
        assert_eq!(x_axis.num, DEFAULT_POINTS_PER_AXIS);
        assert_eq!(y_axis.num, DEFAULT_POINTS_PER_AXIS);
    }

    #[test]
    fn explicit_axes_take_precedence() {
        let request = SampleRequest {
            surface: SurfaceKind::Himmelblau,
            x_axis: Some(AxisSpec::new(0.0, 4.0, 5).unwrap()),
            y_axis: Some(AxisSpec::new(0.0, 3.0, 4).unwrap()),
        };

        let grid = run(&request, &ProgressReporter::new()).unwrap();

        assert_eq!(grid.shape(), (4, 5));
        assert_eq!(grid.z()[(2, 3)], 0.0);
    }

    #[test]
    fn sampled_archive_can_be_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("himmelblau.npz");
        let request = SampleRequest {
            surface: SurfaceKind::Himmelblau,
            x_axis: Some(AxisSpec::new(-5.0, 5.0, 21).unwrap()),
            y_axis: Some(AxisSpec::new(-5.0, 5.0, 11).unwrap()),
        };

        let written = run_to_path(&request, &path, &ProgressReporter::new()).unwrap();
        let loaded = NpzFile::read_from_path(&path).unwrap();

        assert_eq!(loaded, written);
    }
}
