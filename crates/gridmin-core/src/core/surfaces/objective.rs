use super::{Domain, Gradient, Hessian, Surface};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Coordinates held constant. Derivatives along a fixed coordinate read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedDofs {
    pub x: bool,
    pub y: bool,
}

impl FixedDofs {
    fn as_array(self) -> [bool; 2] {
        [self.x, self.y]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationCounts {
    pub function_evals: usize,
    pub gradient_evals: usize,
    pub hessian_evals: usize,
}

/// A borrowed surface with fixed coordinates and evaluation bookkeeping.
///
/// Counters are atomic, so an `Objective` can be shared across the threads that sample a
/// grid in parallel.
pub struct Objective<'s> {
    surface: &'s dyn Surface,
    fixed: FixedDofs,
    function_evals: AtomicUsize,
    gradient_evals: AtomicUsize,
    hessian_evals: AtomicUsize,
}

impl<'s> Objective<'s> {
    pub fn new(surface: &'s dyn Surface) -> Self {
        Self {
            surface,
            fixed: FixedDofs::default(),
            function_evals: AtomicUsize::new(0),
            gradient_evals: AtomicUsize::new(0),
            hessian_evals: AtomicUsize::new(0),
        }
    }

    pub fn with_fixed(mut self, fixed: FixedDofs) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn fixed(&self) -> FixedDofs {
        self.fixed
    }

    pub fn evaluation_counts(&self) -> EvaluationCounts {
        EvaluationCounts {
            function_evals: self.function_evals.load(Ordering::Relaxed),
            gradient_evals: self.gradient_evals.load(Ordering::Relaxed),
            hessian_evals: self.hessian_evals.load(Ordering::Relaxed),
        }
    }

    pub fn reset_counts(&self) {
        self.function_evals.store(0, Ordering::Relaxed);
        self.gradient_evals.store(0, Ordering::Relaxed);
        self.hessian_evals.store(0, Ordering::Relaxed);
    }
}

impl Surface for Objective<'_> {
    fn name(&self) -> &'static str {
        self.surface.name()
    }

    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.function_evals.fetch_add(1, Ordering::Relaxed);
        self.surface.evaluate(x, y)
    }

    fn gradient(&self, x: f64, y: f64) -> Gradient {
        self.gradient_evals.fetch_add(1, Ordering::Relaxed);
        let mut gradient = self.surface.gradient(x, y);
        for (component, fixed) in gradient.iter_mut().zip(self.fixed.as_array()) {
            if fixed {
                *component = 0.0;
            }
        }
        gradient
    }

    fn hessian(&self, x: f64, y: f64) -> Hessian {
        self.hessian_evals.fetch_add(1, Ordering::Relaxed);
        let mut hessian = self.surface.hessian(x, y);
        let fixed = self.fixed.as_array();
        for i in 0..2 {
            for j in 0..2 {
                if fixed[i] || fixed[j] {
                    hessian[i][j] = 0.0;
                }
            }
        }
        hessian
    }

    fn domain(&self) -> Domain {
        self.surface.domain()
    }

    fn minima(&self) -> &'static [(f64, f64)] {
        self.surface.minima()
    }

    fn saddles(&self) -> &'static [(f64, f64)] {
        self.surface.saddles()
    }
}
