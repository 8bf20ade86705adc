use super::{Domain, Gradient, Hessian, Surface};
use std::f64::consts::PI;

const A: f64 = 1.0;
const B: f64 = 5.1 / (4.0 * PI * PI);
const C: f64 = 5.0 / PI;
const R: f64 = 6.0;
const S: f64 = 10.0;
const T: f64 = 1.0 / (8.0 * PI);

/// Branin-Hoo function. Three global minima, all with value 0.397887.
#[derive(Debug, Clone, Copy, Default)]
pub struct Branin;

impl Surface for Branin {
    fn name(&self) -> &'static str {
        "branin"
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let inner = y - B * x * x + C * x - R;
        A * inner * inner + S * (1.0 - T) * x.cos() + S
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        let inner = y - B * x * x + C * x - R;
        let slope = C - 2.0 * B * x;
        [
            2.0 * A * inner * slope - S * (1.0 - T) * x.sin(),
            2.0 * A * inner,
        ]
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        let inner = y - B * x * x + C * x - R;
        let slope = C - 2.0 * B * x;
        let xx = 2.0 * A * slope * slope - 4.0 * A * B * inner - S * (1.0 - T) * x.cos();
        let xy = 2.0 * A * slope;
        [[xx, xy], [xy, 2.0 * A]]
    }

    fn domain(&self) -> Domain {
        Domain {
            x: (-5.0, 18.0),
            y: (-5.0, 20.0),
        }
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        &[(-PI, 12.275), (PI, 2.275), (9.42478, 2.475)]
    }
}
