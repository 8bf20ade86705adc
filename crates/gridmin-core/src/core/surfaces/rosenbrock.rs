use super::{Domain, Gradient, Hessian, Surface};

/// Rosenbrock's banana function with `a = 1`, `b = 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Surface for Rosenbrock {
    fn name(&self) -> &'static str {
        "rosenbrock"
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let valley = y - x * x;
        (1.0 - x) * (1.0 - x) + 100.0 * valley * valley
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        let valley = y - x * x;
        [-2.0 * (1.0 - x) - 400.0 * x * valley, 200.0 * valley]
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        [
            [2.0 - 400.0 * y + 1200.0 * x * x, -400.0 * x],
            [-400.0 * x, 200.0],
        ]
    }

    fn domain(&self) -> Domain {
        Domain {
            x: (-2.0, 2.0),
            y: (-2.0, 2.0),
        }
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        &[(1.0, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_minimum_is_zero() {
        assert_eq!(Rosenbrock.evaluate(1.0, 1.0), 0.0);
    }

    #[test]
    fn value_at_arbitrary_point() {
        assert!((Rosenbrock.evaluate(0.3, 4.0) - 1529.3).abs() < 1e-4);
    }

    #[test]
    fn derivatives_at_global_minimum() {
        assert_eq!(Rosenbrock.gradient(1.0, 1.0), [0.0, 0.0]);
        assert_eq!(Rosenbrock.hessian(1.0, 1.0), [[802.0, -400.0], [-400.0, 200.0]]);
    }
}
