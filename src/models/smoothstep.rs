//! Smoothed heaviside (smoothstep) functions
//!
//! Replaces a hard step at `x = 0` by two exponential tails that meet at
//! one half:
//!
//! ```text
//! y(x) = 1/2 · exp(x / w)          x <= 0
//! y(x) = 1 - 1/2 · exp(-x / w)     x >  0
//! ```
//!
//! `w` is the width of the transition. The function is continuous and
//! monotonically increasing, with `y(0) = 1/2`, `y → 0` as `x → -∞` and
//! `y → 1` as `x → +∞`.
//!
//! The width is not checked. `w = 0` degenerates to a hard step with NaN at
//! `x = 0`, a negative width flips the step; both follow IEEE-754 arithmetic.
//!
//! # Example
//!
//! ```rust
//! use snowline_rs::models::smoothstep::{smoothstep, smoothstep_data};
//! use snowline_rs::physics::PhysicalData;
//!
//! assert_eq!(smoothstep(0.0, 2.0), 0.5);
//!
//! // Scalar in, scalar out; vector in, vector of the same length out
//! let y = smoothstep_data(&PhysicalData::from_vec(vec![-1.0, 0.0, 1.0]), 1.0);
//! assert_eq!(y.len(), 3);
//! ```

use crate::physics::PhysicalData;
use std::sync::Arc;

/// Smoothed heaviside of a single offset
///
/// # Arguments
///
/// * `x` - Offset from the step location
/// * `w` - Width of the transition (same unit as `x`)
#[inline]
pub fn smoothstep(x: f64, w: f64) -> f64 {
    if x <= 0.0 {
        0.5 * (x / w).exp()
    } else {
        1.0 - 0.5 * (-x / w).exp()
    }
}

/// Smoothed heaviside at every offset of a slice
pub fn smoothstep_series(x: &[f64], w: f64) -> Vec<f64> {
    x.iter().map(|&x| smoothstep(x, w)).collect()
}

/// Smoothed heaviside of scalar or array data
///
/// The result has the same variant and shape as the input.
pub fn smoothstep_data(x: &PhysicalData, w: f64) -> PhysicalData {
    x.map(|x| smoothstep(x, w))
}

// =================================================================================================
// Transition profiles
// =================================================================================================

/// Shape of the step between two regions
///
/// # Types
///
/// - **SoftHeaviside**: Exponential smoothstep with a given width (default)
/// - **Heaviside**: Hard step, the zero-width limit of the smoothstep
/// - **Custom**: User-defined step function of the offset
pub enum Transition {
    /// Exponential smoothstep
    ///
    /// # Parameters
    ///
    /// - `width` : Width of the transition, same unit as the offsets
    ///
    /// # Example
    ///
    /// ```rust
    /// use snowline_rs::models::Transition;
    /// use snowline_rs::constants::AU;
    ///
    /// let transition = Transition::soft(0.25 * AU);
    /// assert_eq!(transition.evaluate(0.0), 0.5);
    /// ```
    SoftHeaviside {
        width: f64,
    },

    /// Hard step
    ///
    /// `0` for negative offsets, `1/2` at zero, `1` for positive offsets.
    Heaviside,

    /// Custom step function
    ///
    /// # Example
    ///
    /// ```rust
    /// use snowline_rs::models::Transition;
    ///
    /// // Logistic step of unit width
    /// let transition = Transition::custom(|x| 1.0 / (1.0 + (-x).exp()));
    /// assert_eq!(transition.evaluate(0.0), 0.5);
    /// ```
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

// ==================== Manual Clone Implementation ====================

impl Clone for Transition {
    fn clone(&self) -> Self {
        match self {
            Self::SoftHeaviside { width } => Self::SoftHeaviside { width: *width },
            Self::Heaviside => Self::Heaviside,
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SoftHeaviside { width } => f
                .debug_struct("SoftHeaviside")
                .field("width", width)
                .finish(),
            Self::Heaviside => f.debug_struct("Heaviside").finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("function", &"<user-defined>")
                .finish(),
        }
    }
}

// ==================== Implementation ====================

impl Transition {
    /// Create an exponential smoothstep of the given width
    pub fn soft(width: f64) -> Self {
        Self::SoftHeaviside { width }
    }

    /// Create a hard step
    pub fn hard() -> Self {
        Self::Heaviside
    }

    /// Create a custom step from a function of the offset
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Width of the transition, when the shape has one
    pub fn width(&self) -> Option<f64> {
        match self {
            Self::SoftHeaviside { width } => Some(*width),
            _ => None,
        }
    }

    /// Evaluate the step at a single offset
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::SoftHeaviside { width } => smoothstep(x, *width),

            Self::Heaviside => {
                if x < 0.0 {
                    0.0
                } else if x > 0.0 {
                    1.0
                } else {
                    // NaN also lands here and stays NaN
                    0.5 + 0.0 * x
                }
            }

            Self::Custom(f) => f(x),
        }
    }

    /// Evaluate at multiple offsets
    pub fn evaluate_series(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluate on scalar or array data, keeping its shape
    pub fn evaluate_data(&self, x: &PhysicalData) -> PhysicalData {
        x.map(|x| self.evaluate(x))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::soft(crate::constants::DEFAULT_TRANSITION_WIDTH)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
