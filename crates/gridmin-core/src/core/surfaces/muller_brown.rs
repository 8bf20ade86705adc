use super::{Domain, Gradient, Hessian, Surface};

const A: [f64; 4] = [-200.0, -100.0, -170.0, 15.0];
const LA: [f64; 4] = [-1.0, -1.0, -6.5, 0.7];
const LB: [f64; 4] = [0.0, 0.0, 11.0, 0.6];
const LC: [f64; 4] = [-10.0, -10.0, -6.5, 0.7];
const X0: [f64; 4] = [1.0, 0.0, -0.5, -1.0];
const Y0: [f64; 4] = [0.0, 0.5, 1.5, 1.0];

/// Müller-Brown potential, a sum of four anisotropic Gaussians.
///
/// Three minima and two saddle points on x in [-1.5, 1.2], y in [-0.2, 2.0].
/// K. Müller and L. D. Brown, Theoret. Chim. Acta 53, 75-93 (1979).
#[derive(Debug, Clone, Copy, Default)]
pub struct MullerBrown;

/// Weighted exponential of term `i` together with the partials of its exponent.
#[inline]
fn term(i: usize, x: f64, y: f64) -> (f64, f64, f64) {
    let dx = x - X0[i];
    let dy = y - Y0[i];
    let weight = A[i] * (LA[i] * dx * dx + LB[i] * dx * dy + LC[i] * dy * dy).exp();
    let phi_x = 2.0 * LA[i] * dx + LB[i] * dy;
    let phi_y = LB[i] * dx + 2.0 * LC[i] * dy;
    (weight, phi_x, phi_y)
}

impl Surface for MullerBrown {
    fn name(&self) -> &'static str {
        "muller-brown"
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (0..4)
            .map(|i| {
                let dx = x - X0[i];
                let dy = y - Y0[i];
                A[i] * (LA[i] * dx * dx + LB[i] * dx * dy + LC[i] * dy * dy).exp()
            })
            .sum()
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        (0..4).fold([0.0, 0.0], |[gx, gy], i| {
            let (weight, phi_x, phi_y) = term(i, x, y);
            [gx + weight * phi_x, gy + weight * phi_y]
        })
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        let (mut xx, mut xy, mut yy) = (0.0, 0.0, 0.0);
        for i in 0..4 {
            let (weight, phi_x, phi_y) = term(i, x, y);
            xx += weight * (phi_x * phi_x + 2.0 * LA[i]);
            xy += weight * (phi_x * phi_y + LB[i]);
            yy += weight * (phi_y * phi_y + 2.0 * LC[i]);
        }
        [[xx, xy], [xy, yy]]
    }

    fn domain(&self) -> Domain {
        Domain {
            x: (-1.5, 1.2),
            y: (-0.2, 2.0),
        }
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        &[(-0.558, 1.442), (0.623, 0.028), (-0.050, 0.466)]
    }

    fn saddles(&self) -> &'static [(f64, f64)] {
        &[(0.212, 0.293), (-0.822, 0.624)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-4;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn values_at_documented_minima() {
        let mb = MullerBrown;
        assert!(f64_approx_equal(mb.evaluate(-0.558, 1.442), -146.69948920058778));
        assert!(f64_approx_equal(mb.evaluate(0.623, 0.028), -108.16665005353302));
        assert!(f64_approx_equal(mb.evaluate(-0.050, 0.466), -80.76746772526472));
    }

    #[test]
    fn values_at_saddle_points() {
        let mb = MullerBrown;
        let [first, second] = [mb.saddles()[0], mb.saddles()[1]];
        assert!(f64_approx_equal(mb.evaluate(first.0, first.1), -72.24891965936473));
        assert!(f64_approx_equal(mb.evaluate(second.0, second.1), -40.66484530104902));
    }

    #[test]
    fn derivatives_at_arbitrary_point() {
        let [gx, gy] = MullerBrown.gradient(1.623, 0.38);
        assert!(f64_approx_equal(gx, 3075.3442508875) && f64_approx_equal(gy, 873.2580292582));

        let h = MullerBrown.hessian(1.623, 0.38);
        assert!(f64_approx_equal(h[0][0], 11191.4222551898));
        assert!(f64_approx_equal(h[0][1], 2421.6397063169));
        assert!(f64_approx_equal(h[1][1], 613.9188771615));
    }

    #[test]
    fn documented_minima_have_positive_definite_hessians() {
        for &(x, y) in MullerBrown.minima() {
            let h = MullerBrown.hessian(x, y);
            assert!(h[0][0] > 0.0);
            assert!(h[0][0] * h[1][1] - h[0][1] * h[1][0] > 0.0);
        }
    }

    #[test]
    fn values_at_arbitrary_points() {
        let mb = MullerBrown;
        assert!(f64_approx_equal(mb.evaluate(-1.050, 0.466), -26.4116181673));
        assert!(f64_approx_equal(mb.evaluate(1.623, 0.38), 875.435521808));
    }
}
