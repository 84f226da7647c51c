//! Disk fixtures for testing
//!
//! These disks have temperature profiles with a known analytical snow line,
//! which makes the located radius checkable.

use snowline_rs::constants::AU;
use snowline_rs::physics::PhysicalState;

// =================================================================================================
// Power-law disk: T(r) = T₀ · (r / AU)^(-q)
// =================================================================================================

/// Passively irradiated disk with a power-law temperature profile
///
/// Analytical snow line: r_sl = AU · (T₀ / T_sl)^(1/q)
pub struct PowerLawDisk {
    /// Temperature at 1 AU \[K\]
    pub t0: f64,
    /// Power-law index q
    pub q: f64,
    /// Inner radius \[AU\]
    pub r_in: f64,
    /// Outer radius \[AU\]
    pub r_out: f64,
    /// Number of cells
    pub cells: usize,
}

impl PowerLawDisk {
    pub fn new(t0: f64, q: f64, r_in: f64, r_out: f64, cells: usize) -> Self {
        Self { t0, q, r_in, r_out, cells }
    }

    /// Disk used across the tests: snow line at (280 / 170)² ≈ 2.713 AU
    pub fn standard(cells: usize) -> Self {
        Self::new(280.0, 0.5, 0.1, 20.0, cells)
    }

    /// Log-spaced radius grid \[cm\]
    pub fn radius(&self) -> Vec<f64> {
        let ratio = (self.r_out / self.r_in).ln();
        (0..self.cells)
            .map(|i| {
                let fraction = i as f64 / (self.cells - 1) as f64;
                self.r_in * (ratio * fraction).exp() * AU
            })
            .collect()
    }

    /// Gas temperature on the grid \[K\]
    pub fn temperature(&self) -> Vec<f64> {
        self.radius()
            .iter()
            .map(|r| self.t0 * (r / AU).powf(-self.q))
            .collect()
    }

    /// Analytical snow line \[cm\]
    pub fn analytical_snowline(&self, t_sublimation: f64) -> f64 {
        AU * (self.t0 / t_sublimation).powf(1.0 / self.q)
    }

    pub fn state(&self) -> PhysicalState {
        PhysicalState::disk(self.radius(), self.temperature())
    }
}
