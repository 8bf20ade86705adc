use ndarray::{Array2, Zip};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Array shapes do not match: x is {x:?}, y is {y:?}, z is {z:?}")]
    InvalidShape {
        x: (usize, usize),
        y: (usize, usize),
        z: (usize, usize),
    },

    #[error("Grid must contain at least one sample point")]
    Empty,

    #[error("Invalid axis specification: {0}")]
    InvalidAxis(String),
}

/// Position of a sample point, addressed as (row, column) of the grid arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub(crate) fn as_tuple(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// An evenly spaced axis, with `linspace` semantics: both endpoints are included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub start: f64,
    pub stop: f64,
    pub num: usize,
}

impl AxisSpec {
    pub fn new(start: f64, stop: f64, num: usize) -> Result<Self, GridError> {
        if num == 0 {
            return Err(GridError::InvalidAxis(
                "an axis needs at least one point".to_string(),
            ));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(GridError::InvalidAxis(format!(
                "axis bounds must be finite (got {start}..{stop})"
            )));
        }
        Ok(Self { start, stop, num })
    }

    pub fn linspace(&self) -> Vec<f64> {
        if self.num == 1 {
            return vec![self.start];
        }
        let step = (self.stop - self.start) / (self.num - 1) as f64;
        let mut values: Vec<f64> = (0..self.num)
            .map(|i| self.start + step * i as f64)
            .collect();
        // Pin the last sample so accumulated rounding never overshoots the bound.
        values[self.num - 1] = self.stop;
        values
    }
}

/// A scalar field sampled on a rectangular mesh.
///
/// `x`, `y` and `z` always share the same non-empty shape; the mesh may be non-uniform.
/// A grid is immutable once built: extraction works on its own copy of `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Array2<f64>,
    y: Array2<f64>,
    z: Array2<f64>,
}

impl Grid {
    pub fn new(x: Array2<f64>, y: Array2<f64>, z: Array2<f64>) -> Result<Self, GridError> {
        if x.dim() != y.dim() || x.dim() != z.dim() {
            return Err(GridError::InvalidShape {
                x: x.dim(),
                y: y.dim(),
                z: z.dim(),
            });
        }
        if z.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self { x, y, z })
    }

    /// Evaluates `func` on the meshgrid spanned by two axes.
    ///
    /// The mesh uses Cartesian (`xy`) indexing: arrays have shape `(y_axis.num, x_axis.num)`,
    /// with `x` varying along columns and `y` along rows.
    pub fn sample<F>(x_axis: &AxisSpec, y_axis: &AxisSpec, func: F) -> Result<Self, GridError>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        let xs = x_axis.linspace();
        let ys = y_axis.linspace();
        let shape = (ys.len(), xs.len());

        let x = Array2::from_shape_fn(shape, |(_, col)| xs[col]);
        let y = Array2::from_shape_fn(shape, |(row, _)| ys[row]);

        debug!("Sampling field on a {}x{} mesh", shape.0, shape.1);
        let z = evaluate_on_mesh(&x, &y, func);

        Self::new(x, y, z)
    }

    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }

    /// Shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        self.z.dim()
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Coordinate `(x, y)` of a sample point.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the grid.
    pub fn coordinate(&self, index: GridIndex) -> (f64, f64) {
        (self.x[index.as_tuple()], self.y[index.as_tuple()])
    }

    /// Field value of a sample point.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the grid.
    pub fn value(&self, index: GridIndex) -> f64 {
        self.z[index.as_tuple()]
    }

    pub fn finite_count(&self) -> usize {
        self.z.iter().filter(|v| v.is_finite()).count()
    }

    /// Smallest and largest finite field values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.z
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(feature = "parallel")]
fn evaluate_on_mesh<F>(x: &Array2<f64>, y: &Array2<f64>, func: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    Zip::from(x).and(y).par_map_collect(|&px, &py| func(px, py))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_on_mesh<F>(x: &Array2<f64>, y: &Array2<f64>, func: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    Zip::from(x).and(y).map_collect(|&px, &py| func(px, py))
}
