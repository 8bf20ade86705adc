use super::{Domain, Gradient, Hessian, Surface};

// Terms of the form sin(sqrt(|z|)) and their first two derivatives in z.
// Both derivatives diverge at z = 0.

fn sin_sqrt(z: f64) -> f64 {
    z.abs().sqrt().sin()
}

fn sin_sqrt_d1(z: f64) -> f64 {
    let root = z.abs().sqrt();
    root.cos() * z.signum() / (2.0 * root)
}

fn sin_sqrt_d2(z: f64) -> f64 {
    let root = z.abs().sqrt();
    (-root * root.sin() - root.cos()) / (4.0 * root.powi(3))
}

/// Eggholder function, highly multimodal with its global minimum on the domain edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eggholder;

impl Surface for Eggholder {
    fn name(&self) -> &'static str {
        "eggholder"
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let shifted = y + 47.0;
        -shifted * sin_sqrt(x / 2.0 + shifted) - x * sin_sqrt(x - shifted)
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        let shifted = y + 47.0;
        let (u, w) = (x / 2.0 + shifted, x - shifted);
        let (du, dw) = (sin_sqrt_d1(u), sin_sqrt_d1(w));
        [
            -shifted * du / 2.0 - sin_sqrt(w) - x * dw,
            -sin_sqrt(u) - shifted * du + x * dw,
        ]
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        let shifted = y + 47.0;
        let (u, w) = (x / 2.0 + shifted, x - shifted);
        let (du, dw) = (sin_sqrt_d1(u), sin_sqrt_d1(w));
        let (ddu, ddw) = (sin_sqrt_d2(u), sin_sqrt_d2(w));
        let xy = -du / 2.0 - shifted * ddu / 2.0 + dw + x * ddw;
        [
            [-shifted * ddu / 4.0 - 2.0 * dw - x * ddw, xy],
            [xy, -2.0 * du - shifted * ddu - x * ddw],
        ]
    }

    fn domain(&self) -> Domain {
        Domain {
            x: (-512.0, 612.0),
            y: (-512.0, 613.0),
        }
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        &[(512.0, 404.2319)]
    }
}
