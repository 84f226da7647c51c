//! Numerical helpers shared by the models
//!
//! - Parallel execution threshold used by [`PhysicalData::apply()`]
//! - Nearest-sample search and piecewise-linear interpolation on 1D grids
//! - NaN/Inf diagnostics for computed states

use crate::physics::{PhysicalData, PhysicalState};
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::{Mutex, MutexGuard};

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Stored in an AtomicUsize so it can be tuned at runtime (benches, tests)
// without a mutex on every `apply()` call. Relaxed ordering is enough: the
// value is a performance hint, not a synchronisation point.
// =================================================================================================

/// Default number of elements above which [`PhysicalData::apply()`] switches
/// to parallel iteration.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// `PhysicalData::apply()` iterates sequentially when the data holds fewer
/// elements than this value and switches to rayon above it, only when the
/// crate is compiled with the `parallel` feature.
///
/// ```rust
/// use snowline_rs::numerics::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// ```rust
/// use snowline_rs::numerics::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert_eq!(parallel_threshold(), 4096);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Guards are serialised on a lock so tests pinning different thresholds
/// never interleave.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Grid search and interpolation
// =================================================================================================

/// Index of the sample closest to `target`
///
/// Returns the first index minimising `|values[i] - target|`. NaN samples
/// are skipped; `None` when no finite comparison is possible (empty input or
/// all NaN).
///
/// ```rust
/// use snowline_rs::numerics::argmin_abs_deviation;
///
/// let temperature = [300.0, 200.0, 160.0, 120.0];
/// assert_eq!(argmin_abs_deviation(&temperature, 170.0), Some(2));
/// ```
pub fn argmin_abs_deviation(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, value) in values.iter().enumerate() {
        let deviation = (value - target).abs();
        if deviation.is_nan() {
            continue;
        }
        match best {
            Some((_, best_deviation)) if deviation >= best_deviation => {}
            _ => best = Some((i, deviation)),
        }
    }

    best.map(|(i, _)| i)
}

/// One-dimensional piecewise-linear interpolation
///
/// `xp` must be ascending. Queries below `xp[0]` return `fp[0]`, queries
/// above the last abscissa return the last ordinate. A NaN query yields NaN.
///
/// # Errors
///
/// - `xp` is empty
/// - `xp` and `fp` lengths differ
/// - no segment brackets `x` (NaN or unsorted abscissae)
///
/// ```rust
/// use snowline_rs::numerics::interp;
///
/// let y = interp(1.5, &[1.0, 2.0], &[10.0, 20.0]).unwrap();
/// assert!((y - 15.0).abs() < 1e-12);
///
/// // Clamped outside the abscissa range
/// assert_eq!(interp(5.0, &[1.0, 2.0], &[10.0, 20.0]).unwrap(), 20.0);
/// ```
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> Result<f64, String> {
    if xp.is_empty() {
        return Err("Cannot interpolate on an empty abscissa".to_string());
    }

    if xp.len() != fp.len() {
        return Err(format!(
            "Interpolation length mismatch: {} abscissae versus {} ordinates",
            xp.len(),
            fp.len()
        ));
    }

    if x.is_nan() {
        return Ok(f64::NAN);
    }

    let last = xp.len() - 1;

    if x <= xp[0] {
        return Ok(fp[0]);
    }
    if x >= xp[last] {
        return Ok(fp[last]);
    }

    for j in 0..last {
        if xp[j] <= x && x < xp[j + 1] {
            let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
            return Ok(fp[j] + slope * (x - xp[j]));
        }
    }

    Err(format!(
        "No interpolation segment brackets {} in abscissae {:?}",
        x, xp
    ))
}

// =================================================================================================
// Diagnostics
// =================================================================================================

/// Count NaN or infinite values
pub fn count_non_finite(data: &PhysicalData) -> usize {
    data.values().filter(|x| !x.is_finite()).count()
}

/// Validate a physical state for numerical issues
///
/// # Returns
///
/// `Ok(())` if every quantity is finite, `Err(msg)` naming the first
/// offending quantity otherwise.
pub fn validate_state(state: &PhysicalState) -> Result<(), String> {
    for (quantity, data) in &state.quantities {
        if data.values().any(|x| x.is_nan()) {
            return Err(format!(
                "NaN detected in {}. Check the transition width and the input grid.",
                quantity
            ));
        }

        if data.values().any(|x| x.is_infinite()) {
            return Err(format!(
                "Infinity detected in {}. This indicates numerical overflow.",
                quantity
            ));
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
