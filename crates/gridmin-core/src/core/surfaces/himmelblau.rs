use super::{Domain, Gradient, Hessian, Surface};

/// Himmelblau's function: four minima of value zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Himmelblau;

impl Surface for Himmelblau {
    fn name(&self) -> &'static str {
        "himmelblau"
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        a * a + b * b
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        [4.0 * x * a + 2.0 * b, 2.0 * a + 4.0 * y * b]
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        let xy = 4.0 * (x + y);
        [
            [4.0 * a + 8.0 * x * x + 2.0, xy],
            [xy, 4.0 * b + 8.0 * y * y + 2.0],
        ]
    }

    fn domain(&self) -> Domain {
        Domain {
            x: (-5.0, 5.0),
            y: (-5.0, 5.0),
        }
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        &[
            (3.0, 2.0),
            (-2.805118, 3.131312),
            (-3.779310, -3.283186),
            (3.584428, -1.848126),
        ]
    }
}
