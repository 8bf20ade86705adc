//! Closed-form 2D benchmark surfaces.
//!
//! These are the standard trial potentials used to exercise minima search: each one can be
//! evaluated pointwise together with its analytic gradient and Hessian, carries a conventional
//! plotting domain, and lists its documented stationary points so extraction results can be
//! checked against known answers.
//!
//! [`Objective`] wraps any surface to hold coordinates fixed and to count evaluations.

mod branin;
mod eggholder;
mod himmelblau;
mod muller_brown;
mod objective;
mod rosenbrock;

pub use branin::Branin;
pub use eggholder::Eggholder;
pub use himmelblau::Himmelblau;
pub use muller_brown::MullerBrown;
pub use objective::{EvaluationCounts, FixedDofs, Objective};
pub use rosenbrock::Rosenbrock;

use crate::core::grid::{AxisSpec, Grid, GridError};
use phf::phf_map;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of samples per axis used when no explicit axis is requested.
pub const DEFAULT_POINTS_PER_AXIS: usize = 400;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SurfaceError {
    #[error("Unknown surface '{0}'. Run `gridmin surfaces` to list available surfaces.")]
    Unknown(String),
}

/// Rectangular region of the plane, as `(start, stop)` pairs per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Domain {
    pub fn x_axis(&self, num: usize) -> Result<AxisSpec, GridError> {
        AxisSpec::new(self.x.0, self.x.1, num)
    }

    pub fn y_axis(&self, num: usize) -> Result<AxisSpec, GridError> {
        AxisSpec::new(self.y.0, self.y.1, num)
    }
}

/// `[df/dx, df/dy]`.
pub type Gradient = [f64; 2];

/// Second derivatives with rows and columns ordered `(x, y)`.
pub type Hessian = [[f64; 2]; 2];

pub trait Surface: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, x: f64, y: f64) -> f64;

    fn gradient(&self, x: f64, y: f64) -> Gradient;

    fn hessian(&self, x: f64, y: f64) -> Hessian;

    /// Conventional plotting domain.
    fn domain(&self) -> Domain;

    /// Documented minimum locations as `(x, y)`.
    fn minima(&self) -> &'static [(f64, f64)];

    /// Documented first-order saddle points as `(x, y)`.
    fn saddles(&self) -> &'static [(f64, f64)] {
        &[]
    }

    fn sample(&self, x_axis: &AxisSpec, y_axis: &AxisSpec) -> Result<Grid, GridError> {
        Grid::sample(x_axis, y_axis, |x, y| self.evaluate(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    MullerBrown,
    Branin,
    Himmelblau,
    Rosenbrock,
    Eggholder,
}

static SURFACE_NAMES: phf::Map<&'static str, SurfaceKind> = phf_map! {
    "muller-brown" => SurfaceKind::MullerBrown,
    "mullerbrown" => SurfaceKind::MullerBrown,
    "mb" => SurfaceKind::MullerBrown,
    "branin" => SurfaceKind::Branin,
    "himmelblau" => SurfaceKind::Himmelblau,
    "rosenbrock" => SurfaceKind::Rosenbrock,
    "rosen" => SurfaceKind::Rosenbrock,
    "eggholder" => SurfaceKind::Eggholder,
};

static MULLER_BROWN: MullerBrown = MullerBrown;
static BRANIN: Branin = Branin;
static HIMMELBLAU: Himmelblau = Himmelblau;
static ROSENBROCK: Rosenbrock = Rosenbrock;
static EGGHOLDER: Eggholder = Eggholder;

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 5] = [
        SurfaceKind::MullerBrown,
        SurfaceKind::Branin,
        SurfaceKind::Himmelblau,
        SurfaceKind::Rosenbrock,
        SurfaceKind::Eggholder,
    ];

    pub fn surface(self) -> &'static dyn Surface {
        match self {
            SurfaceKind::MullerBrown => &MULLER_BROWN,
            SurfaceKind::Branin => &BRANIN,
            SurfaceKind::Himmelblau => &HIMMELBLAU,
            SurfaceKind::Rosenbrock => &ROSENBROCK,
            SurfaceKind::Eggholder => &EGGHOLDER,
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        SURFACE_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| SurfaceError::Unknown(s.to_string()))
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.surface().name())
    }
}

pub fn by_name(name: &str) -> Result<&'static dyn Surface, SurfaceError> {
    name.parse::<SurfaceKind>().map(SurfaceKind::surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_accepts_aliases_case_insensitively() {
        assert_eq!(by_name("Muller-Brown").unwrap().name(), "muller-brown");
        assert_eq!(by_name("MULLERBROWN").unwrap().name(), "muller-brown");
        assert_eq!(by_name("muller_brown").unwrap().name(), "muller-brown");
        assert_eq!(by_name(" rosen ").unwrap().name(), "rosenbrock");
    }

    #[test]
    fn by_name_rejects_unknown_surface() {
        assert!(matches!(
            by_name("ackley"),
            Err(SurfaceError::Unknown(name)) if name == "ackley"
        ));
    }

    #[test]
    fn every_kind_round_trips_through_its_display_name() {
        for kind in SurfaceKind::ALL {
            assert_eq!(kind.to_string().parse::<SurfaceKind>(), Ok(kind));
        }
    }

    #[test]
    fn documented_minima_lie_inside_their_domains() {
        for kind in SurfaceKind::ALL {
            let surface = kind.surface();
            let domain = surface.domain();
            for &(x, y) in surface.minima() {
                assert!(
                    x >= domain.x.0 && x <= domain.x.1 && y >= domain.y.0 && y <= domain.y.1,
                    "{} minimum ({}, {}) outside its domain",
                    surface.name(),
                    x,
                    y
                );
            }
        }
    }

    fn gradient_norm(g: Gradient) -> f64 {
        g[0].hypot(g[1])
    }

    fn determinant(h: Hessian) -> f64 {
        h[0][0] * h[1][1] - h[0][1] * h[1][0]
    }

    #[test]
    fn hessians_are_symmetric() {
        for kind in SurfaceKind::ALL {
            let surface = kind.surface();
            for &(x, y) in surface.minima().iter().chain(surface.saddles()) {
                let h = surface.hessian(x, y);
                assert_eq!(h[0][1], h[1][0], "{} at ({}, {})", surface.name(), x, y);
            }
        }
    }

    #[test]
    fn analytic_gradients_match_central_differences() {
        const STEP: f64 = 1e-6;
        let points = [(0.3, 0.4), (-1.2, 0.9), (1.623, 0.38), (2.0, -1.5)];

        for kind in SurfaceKind::ALL {
            let surface = kind.surface();
            for &(x, y) in &points {
                let [gx, gy] = surface.gradient(x, y);
                let dx = (surface.evaluate(x + STEP, y) - surface.evaluate(x - STEP, y))
                    / (2.0 * STEP);
                let dy = (surface.evaluate(x, y + STEP) - surface.evaluate(x, y - STEP))
                    / (2.0 * STEP);
                let scale = 1.0 + gx.abs().max(gy.abs());
                assert!(
                    (gx - dx).abs() < 1e-5 * scale && (gy - dy).abs() < 1e-5 * scale,
                    "{} gradient at ({}, {}): analytic ({}, {}), numeric ({}, {})",
                    surface.name(),
                    x,
                    y,
                    gx,
                    gy,
                    dx,
                    dy
                );
            }
        }
    }

    #[test]
    fn analytic_hessians_match_gradient_differences() {
        const STEP: f64 = 1e-6;
        let points = [(0.3, 0.4), (-1.2, 0.9), (2.0, -1.5)];

        for kind in SurfaceKind::ALL {
            let surface = kind.surface();
            for &(x, y) in &points {
                let h = surface.hessian(x, y);
                let plus_x = surface.gradient(x + STEP, y);
                let minus_x = surface.gradient(x - STEP, y);
                let plus_y = surface.gradient(x, y + STEP);
                let minus_y = surface.gradient(x, y - STEP);
                let numeric = [
                    [
                        (plus_x[0] - minus_x[0]) / (2.0 * STEP),
                        (plus_x[1] - minus_x[1]) / (2.0 * STEP),
                    ],
                    [
                        (plus_y[0] - minus_y[0]) / (2.0 * STEP),
                        (plus_y[1] - minus_y[1]) / (2.0 * STEP),
                    ],
                ];
                for i in 0..2 {
                    for j in 0..2 {
                        let scale = 1.0 + h[i][j].abs();
                        assert!(
                            (h[i][j] - numeric[i][j]).abs() < 1e-4 * scale,
                            "{} hessian[{}][{}] at ({}, {}): analytic {}, numeric {}",
                            surface.name(),
                            i,
                            j,
                            x,
                            y,
                            h[i][j],
                            numeric[i][j]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn interior_minima_are_stationary_with_positive_definite_hessians() {
        for kind in [SurfaceKind::Branin, SurfaceKind::Himmelblau, SurfaceKind::Rosenbrock] {
            let surface = kind.surface();
            for &(x, y) in surface.minima() {
                assert!(
                    gradient_norm(surface.gradient(x, y)) < 1e-3,
                    "{} gradient at ({}, {})",
                    surface.name(),
                    x,
                    y
                );
                let h = surface.hessian(x, y);
                assert!(h[0][0] > 0.0 && determinant(h) > 0.0);
            }
        }
    }

    #[test]
    fn saddles_have_indefinite_hessians() {
        let surface = SurfaceKind::MullerBrown.surface();
        assert_eq!(surface.saddles().len(), 2);
        for &(x, y) in surface.saddles() {
            assert!(determinant(surface.hessian(x, y)) < 0.0);
        }
        assert!(SurfaceKind::Himmelblau.surface().saddles().is_empty());
    }

    #[test]
    fn sample_uses_surface_values() {
        let surface = SurfaceKind::Rosenbrock.surface();
        let axis = AxisSpec::new(0.0, 1.0, 3).unwrap();
        let grid = surface.sample(&axis, &axis).unwrap();

        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.z()[(2, 2)], 0.0);
        assert_eq!(grid.z()[(0, 0)], 1.0);
    }
}
