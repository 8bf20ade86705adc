use super::error::EngineError;
use crate::core::grid::{Grid, GridIndex};
use ndarray::{Array2, Zip};
use std::fmt;

/// Rule deciding which points become ineligible once a minimum has been selected.
///
/// The threshold is the only parameter; the same rule is applied at every iteration of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExclusionPolicy {
    /// Exclude points whose Euclidean distance in `(x, y)` from the selected minimum is
    /// strictly less than the radius.
    SpatialRadius(f64),
    /// Exclude points whose original field value differs from the selected minimum's value by
    /// strictly less than the band. Excluded points need not be connected.
    ValueBand(f64),
}

impl ExclusionPolicy {
    pub fn threshold(&self) -> f64 {
        match *self {
            ExclusionPolicy::SpatialRadius(r) => r,
            ExclusionPolicy::ValueBand(eps) => eps,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ExclusionPolicy::SpatialRadius(_) => "spatial-radius",
            ExclusionPolicy::ValueBand(_) => "value-band",
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let threshold = self.threshold();
        if threshold.is_nan() || threshold < 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "threshold",
                reason: format!(
                    "{} threshold must be non-negative, got {}",
                    self.kind(),
                    threshold
                ),
            });
        }
        Ok(())
    }

    /// Whether `candidate` is redundant with the minimum at `center`.
    pub fn excludes(&self, grid: &Grid, center: GridIndex, candidate: GridIndex) -> bool {
        match *self {
            ExclusionPolicy::SpatialRadius(radius) => {
                let (cx, cy) = grid.coordinate(center);
                let (px, py) = grid.coordinate(candidate);
                within_radius(px, py, cx, cy, radius)
            }
            ExclusionPolicy::ValueBand(band) => {
                within_band(grid.value(candidate), grid.value(center), band)
            }
        }
    }

    /// Masks `center` and every point it excludes by setting them to `+inf` in `working`.
    ///
    /// Returns how many previously eligible points were masked by this call.
    pub(crate) fn mask(&self, grid: &Grid, center: GridIndex, working: &mut Array2<f64>) -> usize {
        let mut masked = 0;
        let mut mask_point = |w: &mut f64, excluded: bool| {
            if excluded && *w != f64::INFINITY {
                *w = f64::INFINITY;
                masked += 1;
            }
        };

        match *self {
            ExclusionPolicy::SpatialRadius(radius) => {
                let (cx, cy) = grid.coordinate(center);
                Zip::from(&mut *working)
                    .and(grid.x())
                    .and(grid.y())
                    .for_each(|w, &px, &py| mask_point(w, within_radius(px, py, cx, cy, radius)));
            }
            ExclusionPolicy::ValueBand(band) => {
                let center_value = grid.value(center);
                Zip::from(&mut *working)
                    .and(grid.z())
                    .for_each(|w, &pz| mask_point(w, within_band(pz, center_value, band)));
            }
        }

        // The selected point is always removed, even with a zero threshold.
        mask_point(&mut working[center.as_tuple()], true);
        masked
    }
}

impl fmt::Display for ExclusionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} < {}", self.kind(), self.threshold())
    }
}

#[inline]
fn within_radius(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> bool {
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() < radius
}

#[inline]
fn within_band(value: f64, center_value: f64, band: f64) -> bool {
    (value - center_value).abs() < band
}
