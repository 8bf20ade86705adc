use super::error::EngineError;
use super::policy::ExclusionPolicy;
use super::progress::{Progress, ProgressReporter};
use crate::core::grid::{Grid, GridIndex};
use crate::core::record::MinimumRecord;
use ndarray::Array2;
use std::cmp::Ordering;
use tracing::{debug, info, instrument, trace};

/// Why an extraction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of minima was found.
    CountReached,
    /// Every remaining point was masked (or non-finite) before the requested count was
    /// reached. The records found so far are still returned.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub minima: Vec<MinimumRecord>,
    pub requested: usize,
    pub stop_reason: StopReason,
}

impl Extraction {
    fn new(minima: Vec<MinimumRecord>, requested: usize) -> Self {
        let stop_reason = if minima.len() < requested {
            StopReason::Exhausted
        } else {
            StopReason::CountReached
        };
        Self {
            minima,
            requested,
            stop_reason,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.stop_reason == StopReason::Exhausted
    }

    pub fn len(&self) -> usize {
        self.minima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MinimumRecord> {
        self.minima.iter()
    }
}

/// Locates up to `count` minima of `grid`.
///
/// With a policy, minima are extracted greedily: each round selects the smallest remaining
/// finite value, records it from the original grid, then masks the selected point and every
/// point the policy deems redundant with it. Without a policy, the result is simply the
/// `count` smallest finite values in ascending order.
///
/// In both modes ties go to the point earlier in row-major order, and the grid is never
/// modified. Fewer than `count` records are returned when the eligible points run out; this
/// is reported through [`StopReason::Exhausted`] rather than as an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameter`] if `count` is zero or the policy threshold is
/// negative or NaN.
pub fn extract(
    grid: &Grid,
    count: usize,
    policy: Option<ExclusionPolicy>,
) -> Result<Extraction, EngineError> {
    extract_with_progress(grid, count, policy, &ProgressReporter::new())
}

/// Same as [`extract`], emitting one [`Progress::MinimumFound`] event per record.
#[instrument(level = "debug", skip(grid, reporter), fields(shape = ?grid.shape()))]
pub fn extract_with_progress(
    grid: &Grid,
    count: usize,
    policy: Option<ExclusionPolicy>,
    reporter: &ProgressReporter,
) -> Result<Extraction, EngineError> {
    if count == 0 {
        return Err(EngineError::InvalidParameter {
            name: "count",
            reason: "at least one minimum must be requested".to_string(),
        });
    }
    if let Some(policy) = &policy {
        policy.validate()?;
    }

    reporter.report(Progress::TaskStart {
        total_steps: count as u64,
    });

    let extraction = match policy {
        Some(policy) => extract_filtered(grid, count, policy, reporter),
        None => extract_unfiltered(grid, count, reporter),
    };

    reporter.report(Progress::TaskFinish);

    if extraction.is_exhausted() {
        info!(
            "Eligible points exhausted after {} of {} requested minima.",
            extraction.len(),
            count
        );
        reporter.report(Progress::Message(format!(
            "Only {} of {} requested minima could be found",
            extraction.len(),
            count
        )));
    }

    Ok(extraction)
}

fn extract_filtered(
    grid: &Grid,
    count: usize,
    policy: ExclusionPolicy,
    reporter: &ProgressReporter,
) -> Extraction {
    let mut working = grid.z().clone();
    let mut minima = Vec::with_capacity(count.min(grid.len()));

    while minima.len() < count {
        let Some(index) = argmin_finite(&working) else {
            break;
        };

        let record = MinimumRecord::at(grid, index, minima.len());
        debug!("Selected {}", record);

        let masked = policy.mask(grid, index, &mut working);
        trace!("{} masked {} point(s) around M{}", policy, masked, record.rank);

        reporter.report(Progress::MinimumFound(record));
        reporter.report(Progress::TaskIncrement);
        minima.push(record);
    }

    Extraction::new(minima, count)
}

fn extract_unfiltered(grid: &Grid, count: usize, reporter: &ProgressReporter) -> Extraction {
    let mut candidates: Vec<((usize, usize), f64)> = grid
        .z()
        .indexed_iter()
        .filter(|(_, value)| value.is_finite())
        .map(|(index, &value)| (index, value))
        .collect();

    // Stable sort keeps row-major order among equal values.
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let minima: Vec<MinimumRecord> = candidates
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(rank, (index, _))| {
            let record = MinimumRecord::at(grid, GridIndex::from(index), rank);
            debug!("Selected {}", record);
            reporter.report(Progress::MinimumFound(record));
            reporter.report(Progress::TaskIncrement);
            record
        })
        .collect();

    Extraction::new(minima, count)
}

/// Index of the smallest finite entry, first in row-major order on ties.
fn argmin_finite(field: &Array2<f64>) -> Option<GridIndex> {
    let mut best: Option<((usize, usize), f64)> = None;
    for (index, &value) in field.indexed_iter() {
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, best_value)) if value >= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| GridIndex::from(index))
}
