//! Snow line location
//!
//! The snow line is the radius where the gas temperature crosses the
//! sublimation temperature of water ice. On a discrete grid it is found in
//! two steps:
//!
//! 1. Pick the cell whose temperature is closest to the target.
//! 2. Interpolate the radius linearly in temperature over that cell and its
//!    two neighbours.
//!
//! Near the inner or outer grid edge only two samples are available; the
//! interpolation then uses those two and a warning is logged.
//!
//! # Example
//!
//! ```rust
//! use snowline_rs::models::SnowLine;
//!
//! let radius = [1.0, 2.0, 3.0, 4.0];
//! let temperature = [300.0, 200.0, 160.0, 100.0];
//!
//! let snowline = SnowLine::locate(&temperature, &radius, 170.0).unwrap();
//! assert_eq!(snowline.index, 2);
//! assert!((snowline.radius - 2.75).abs() < 1e-12);
//! ```

use crate::numerics::{argmin_abs_deviation, interp};
use crate::physics::{PhysicalQuantity, PhysicalState};

/// Location of the snow line on a radial grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowLine {
    /// Grid index whose temperature is closest to the target
    pub index: usize,
    /// Interpolated radius where the temperature equals the target \[cm\]
    pub radius: f64,
    /// Target temperature \[K\]
    pub temperature: f64,
}

impl SnowLine {
    /// Locate the radius where `temperature` equals `target`
    ///
    /// # Arguments
    ///
    /// * `temperature` - Gas temperature per grid cell \[K\]
    /// * `radius` - Radius of each grid cell \[cm\]
    /// * `target` - Temperature defining the snow line \[K\]
    ///
    /// # Errors
    ///
    /// - `temperature` and `radius` lengths differ
    /// - fewer than two grid cells
    /// - every temperature is NaN
    /// - fewer than two finite samples around the nearest cell
    pub fn locate(temperature: &[f64], radius: &[f64], target: f64) -> Result<Self, String> {

        // ============================= Validation =============================

        if temperature.len() != radius.len() {
            return Err(format!(
                "Grid length mismatch: {} temperatures versus {} radii",
                temperature.len(),
                radius.len()
            ));
        }

        let n = radius.len();
        if n < 2 {
            return Err(format!(
                "Need at least 2 grid cells to locate the snow line, got {}",
                n
            ));
        }

        // ============================= Nearest cell ===========================

        let index = argmin_abs_deviation(temperature, target)
            .ok_or_else(|| "No finite temperature on the grid".to_string())?;

        // ============================= Window =================================

        let lo = index.saturating_sub(1);
        let hi = (index + 2).min(n);

        if index == 0 || index == n - 1 {
            log::warn!(
                "Snow line at grid edge (cell {} of {}), interpolating over {} samples",
                index,
                n,
                hi - lo
            );
        }

        // Order samples by temperature: disks usually cool outwards, the
        // interpolation needs ascending abscissae.
        let mut samples: Vec<(f64, f64)> = (lo..hi)
            .map(|i| (temperature[i], radius[i]))
            .filter(|(t, r)| t.is_finite() && r.is_finite())
            .collect();

        if samples.len() < 2 {
            return Err(format!(
                "Only {} finite sample(s) around cell {}, cannot interpolate the snow line",
                samples.len(),
                index
            ));
        }

        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (t_window, r_window): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();
        let r_snowline = interp(target, &t_window, &r_window)?;

        log::debug!(
            "Snow line at T = {} K: cell {}, r = {:.6e} cm",
            target,
            index,
            r_snowline
        );

        Ok(Self {
            index,
            radius: r_snowline,
            temperature: target,
        })
    }

    /// Locate the snow line from the radius grid and gas temperature of a
    /// disk state
    ///
    /// # Errors
    ///
    /// Same as [`SnowLine::locate`], plus missing or non-vector quantities.
    pub fn from_state(state: &PhysicalState, target: f64) -> Result<Self, String> {
        let temperature = state.require(PhysicalQuantity::Temperature)?;
        let radius = state.require(PhysicalQuantity::Radius)?;

        let temperature = temperature
            .try_as_vector()
            .ok_or_else(|| format!("Temperature must be a radial vector, got {}", temperature))?;
        let radius = radius
            .try_as_vector()
            .ok_or_else(|| format!("Radius must be a radial vector, got {}", radius))?;

        Self::locate(temperature.as_slice(), radius.as_slice(), target)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
