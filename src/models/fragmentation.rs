//! Fragmentation velocity smoothed across the water snow line
//!
//! Ice-coated aggregates outside the snow line survive faster collisions
//! than bare silicates inside it. Instead of a hard jump at the snow line the
//! fragmentation velocity is blended in log space with a smoothstep `s` of
//! the distance to the snow line:
//!
//! ```text
//! v_frag(r) = v_warm · (v_cold / v_warm)^s(r - r_snowline)
//! ```
//!
//! With the defaults (`v_warm = 1 m/s`, `v_cold = 10 m/s`, width 0.25 AU)
//! this is `100 · 10^s` in cm/s.
//!
//! # Example
//!
//! ```rust
//! use snowline_rs::constants::AU;
//! use snowline_rs::models::smooth_vfrag;
//! use snowline_rs::physics::PhysicalState;
//!
//! let radius: Vec<f64> = (1..=40).map(|i| 0.25 * i as f64 * AU).collect();
//! let temperature: Vec<f64> = radius.iter().map(|r| 280.0 * (r / AU).powf(-0.5)).collect();
//!
//! let v_frag = smooth_vfrag(&PhysicalState::disk(radius, temperature)).unwrap();
//!
//! let values = v_frag.to_vec();
//! assert!((values[0] - 100.0).abs() < 1.0);
//! assert!((values[39] - 1000.0).abs() < 1.0);
//! ```

use crate::constants::{
    DEFAULT_TRANSITION_WIDTH,
    V_FRAG_COLD,
    V_FRAG_WARM,
    WATER_SUBLIMATION_TEMPERATURE,
};
use crate::models::{SnowLine, Transition};
use crate::numerics::count_non_finite;
use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration of the smoothed fragmentation velocity
///
/// # Fields
///
/// - `sublimation_temperature`: Temperature defining the snow line \[K\] (default: 170)
/// - `transition_width`: Width of the smoothstep \[cm\] (default: 0.25 AU)
/// - `v_frag_warm`: Fragmentation velocity inside the snow line \[cm/s\] (default: 100)
/// - `v_frag_cold`: Fragmentation velocity outside the snow line \[cm/s\] (default: 1000)
///
/// # Example
///
/// ```rust
/// use snowline_rs::constants::AU;
/// use snowline_rs::models::FragmentationConfig;
///
/// let config = FragmentationConfig::default()
///     .transition_width(0.5 * AU)
///     .velocities(200.0, 800.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragmentationConfig {
    /// Temperature defining the snow line \[K\]
    pub sublimation_temperature: f64,

    /// Width of the smoothstep \[cm\]
    pub transition_width: f64,

    /// Fragmentation velocity inside the snow line \[cm/s\]
    pub v_frag_warm: f64,

    /// Fragmentation velocity outside the snow line \[cm/s\]
    pub v_frag_cold: f64,
}

impl Default for FragmentationConfig {
    fn default() -> Self {
        Self {
            sublimation_temperature: WATER_SUBLIMATION_TEMPERATURE,
            transition_width: DEFAULT_TRANSITION_WIDTH,
            v_frag_warm: V_FRAG_WARM,
            v_frag_cold: V_FRAG_COLD,
        }
    }
}

impl FragmentationConfig {
    /// Builder pattern: set the snow line temperature
    pub fn sublimation_temperature(mut self, temperature: f64) -> Self {
        self.sublimation_temperature = temperature;
        self
    }

    /// Builder pattern: set the transition width
    pub fn transition_width(mut self, width: f64) -> Self {
        self.transition_width = width;
        self
    }

    /// Builder pattern: set both plateau velocities
    pub fn velocities(mut self, warm: f64, cold: f64) -> Self {
        self.v_frag_warm = warm;
        self.v_frag_cold = cold;
        self
    }

    /// Ratio between the cold and warm plateaus
    pub fn contrast(&self) -> f64 {
        self.v_frag_cold / self.v_frag_warm
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> Result<(), String> {
        if !(self.sublimation_temperature.is_finite() && self.sublimation_temperature > 0.0) {
            return Err(format!(
                "Sublimation temperature must be positive, got {}",
                self.sublimation_temperature
            ));
        }
        if !(self.transition_width.is_finite() && self.transition_width > 0.0) {
            return Err(format!(
                "Transition width must be positive, got {}",
                self.transition_width
            ));
        }
        if !(self.v_frag_warm.is_finite() && self.v_frag_warm > 0.0) {
            return Err(format!(
                "Warm fragmentation velocity must be positive, got {}",
                self.v_frag_warm
            ));
        }
        if !(self.v_frag_cold.is_finite() && self.v_frag_cold > 0.0) {
            return Err(format!(
                "Cold fragmentation velocity must be positive, got {}",
                self.v_frag_cold
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Model
// =================================================================================================

/// Fragmentation velocity smoothed across the snow line
///
/// Reads [`PhysicalQuantity::Radius`] and [`PhysicalQuantity::Temperature`],
/// writes [`PhysicalQuantity::FragmentationVelocity`]. The located snow line
/// is reported in the output metadata under `"snowline_radius"` \[cm\] and
/// `"snowline_index"`.
#[derive(Clone, Debug)]
pub struct SmoothFragmentationVelocity {
    config: FragmentationConfig,
    transition: Transition,
}

impl SmoothFragmentationVelocity {
    /// Create the model from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the message of [`FragmentationConfig::validate`].
    pub fn new(config: FragmentationConfig) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            config,
            transition: Transition::soft(config.transition_width),
        })
    }

    /// Replace the step shape
    ///
    /// A soft step also updates the configured `transition_width`; a hard or
    /// custom shape carries its own scale and leaves the configuration as is.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        if let Some(width) = transition.width() {
            self.config.transition_width = width;
        }
        self.transition = transition;
        self
    }

    /// Get configuration
    pub fn config(&self) -> &FragmentationConfig {
        &self.config
    }

    /// Get step shape
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Fragmentation velocity for radial offsets from the snow line
    ///
    /// `offset` is `r - r_snowline` \[cm\]; scalar or array data keeps its
    /// shape.
    pub fn velocity(&self, offset: &PhysicalData) -> PhysicalData {
        let warm = self.config.v_frag_warm;
        let contrast = self.config.contrast();

        offset.map(|x| warm * contrast.powf(self.transition.evaluate(x)))
    }

    /// Locate the snow line on the state's grid
    pub fn snowline(&self, state: &PhysicalState) -> Result<SnowLine, String> {
        SnowLine::from_state(state, self.config.sublimation_temperature)
    }
}

impl Default for SmoothFragmentationVelocity {
    fn default() -> Self {
        Self {
            config: FragmentationConfig::default(),
            transition: Transition::default(),
        }
    }
}

impl PhysicalModel for SmoothFragmentationVelocity {

    fn inputs(&self) -> Vec<PhysicalQuantity> {
        vec![PhysicalQuantity::Radius, PhysicalQuantity::Temperature]
    }

    fn output(&self) -> PhysicalQuantity {
        PhysicalQuantity::FragmentationVelocity
    }

    fn compute_physics(&self, state: &PhysicalState) -> Result<PhysicalState, String> {

        // ====== Inputs ======

        self.check_inputs(state)?;

        let snowline = self.snowline(state)?;
        let radius = state.require(PhysicalQuantity::Radius)?;

        // ====== Blend ======

        let v_frag = self.velocity(&(radius.clone() - snowline.radius));

        let non_finite = count_non_finite(&v_frag);
        if non_finite > 0 {
            log::warn!(
                "{}: {} non-finite fragmentation velocities (snow line r = {:e} cm)",
                self.name(),
                non_finite,
                snowline.radius
            );
        }

        // ====== Output ======

        let mut output = PhysicalState::new(self.output(), v_frag);
        output.set_metadata("snowline_radius".to_string(), snowline.radius);
        output.set_metadata("snowline_index".to_string(), snowline.index as f64);

        Ok(output)
    }

    fn name(&self) -> &str {
        "Smoothed fragmentation velocity"
    }

    fn description(&self) -> Option<&str> {
        Some(
        "Fragmentation velocity blended in log space across the water snow line \
        with a smoothed heaviside of the distance to the snow line."
        )
    }
}

/// Fragmentation velocity of a disk state with the default configuration
///
/// Snow line at 170 K, transition width 0.25 AU, 100 cm/s inside and
/// 1000 cm/s outside: `100 · 10^smoothstep(r - r_snowline, 0.25 AU)`.
///
/// # Errors
///
/// Missing radius or temperature, mismatched lengths, fewer than two cells.
pub fn smooth_vfrag(state: &PhysicalState) -> Result<PhysicalData, String> {
    let model = SmoothFragmentationVelocity::default();
    let mut output = model.compute_physics(state)?;

    output
        .remove(PhysicalQuantity::FragmentationVelocity)
        .ok_or_else(|| "Fragmentation velocity missing from model output".to_string())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AU;
    use crate::models::smoothstep::smoothstep;
    use approx::assert_relative_eq;

    /// Disk with T = 170 K at exactly 3 AU: T(r) = 170 · (r / 3 AU)^(-1/2)
    fn create_disk(n: usize) -> PhysicalState {
        let radius: Vec<f64> = (0..n).map(|i| (0.5 + 0.05 * i as f64) * AU).collect();
        let temperature: Vec<f64> = radius
            .iter()
            .map(|r| 170.0 * (r / (3.0 * AU)).powf(-0.5))
            .collect();
        PhysicalState::disk(radius, temperature)
    }

    #[test]
    fn test_default_config() {
        let config = FragmentationConfig::default();
        assert_eq!(config.sublimation_temperature, 170.0);
        assert_eq!(config.transition_width, 0.25 * AU);
        assert_eq!(config.contrast(), 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let base = FragmentationConfig::default();

        assert!(base.transition_width(0.0).validate().unwrap_err().contains("Transition width"));
        assert!(base.transition_width(f64::NAN).validate().is_err());
        assert!(base.sublimation_temperature(-1.0).validate().is_err());
        assert!(base.velocities(0.0, 1000.0).validate().unwrap_err().contains("Warm"));
        assert!(base.velocities(100.0, -5.0).validate().unwrap_err().contains("Cold"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FragmentationConfig::default().transition_width(-1.0);
        assert!(SmoothFragmentationVelocity::new(config).is_err());
    }

    #[test]
    fn test_velocity_matches_reference_formula() {
        let model = SmoothFragmentationVelocity::default();
        let w = 0.25 * AU;

        for x in [-2.0 * AU, -0.1 * AU, 0.0, 0.3 * AU, 1.5 * AU] {
            let v = model.velocity(&PhysicalData::Scalar(x)).as_scalar();
            let expected = 100.0 * 10f64.powf(smoothstep(x, w));
            assert_relative_eq!(v, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_velocity_at_snowline() {
        let model = SmoothFragmentationVelocity::default();
        let v = model.velocity(&PhysicalData::Scalar(0.0)).as_scalar();
        assert_relative_eq!(v, 100.0 * 10f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_compute_physics_plateaus() {
        let state = create_disk(200);
        let model = SmoothFragmentationVelocity::default();
        let output = model.compute_physics(&state).unwrap();

        let v = output.get(PhysicalQuantity::FragmentationVelocity).unwrap().to_vec();
        assert_eq!(v.len(), 200);

        // r = 0.5 AU is 10 widths inside, r = 10.45 AU far outside
        assert_relative_eq!(v[0], 100.0, max_relative = 1e-3);
        assert_relative_eq!(v[199], 1000.0, max_relative = 1e-3);

        let r_snowline = output.get_metadata("snowline_radius").unwrap();
        assert_relative_eq!(r_snowline, 3.0 * AU, max_relative = 1e-3);
    }

    #[test]
    fn test_compute_physics_monotonic() {
        let state = create_disk(120);
        let v = smooth_vfrag(&state).unwrap().to_vec();

        for pair in v.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_hard_transition() {
        let state = create_disk(100);
        let model = SmoothFragmentationVelocity::default().with_transition(Transition::hard());
        let output = model.compute_physics(&state).unwrap();

        let v = output.get(PhysicalQuantity::FragmentationVelocity).unwrap();
        assert!(v.values().all(|x| x == 100.0 || x == 1000.0 || (x - 100.0 * 10f64.sqrt()).abs() < 1e-9));
    }

    #[test]
    fn test_missing_temperature() {
        let state = PhysicalState::new(PhysicalQuantity::Radius, PhysicalData::from_vec(vec![1.0, 2.0]));
        let err = SmoothFragmentationVelocity::default().compute_physics(&state).unwrap_err();
        assert!(err.contains("Temperature"));
    }

    #[test]
    fn test_zero_width_propagates_nan() {
        // NaN exactly at the snow line
        let state = PhysicalState::disk(vec![1.0, 2.0, 3.0], vec![200.0, 170.0, 140.0]);
        let model = SmoothFragmentationVelocity::default().with_transition(Transition::soft(0.0));

        let v = smooth_vfrag_with(&model, &state);
        assert_eq!(v[0], 100.0);
        assert!(v[1].is_nan());
        assert_relative_eq!(v[2], 1000.0, max_relative = 1e-12);
    }

    fn smooth_vfrag_with(model: &SmoothFragmentationVelocity, state: &PhysicalState) -> Vec<f64> {
        model
            .compute_physics(state)
            .unwrap()
            .get(PhysicalQuantity::FragmentationVelocity)
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_soft_transition_updates_config_width() {
        let model = SmoothFragmentationVelocity::default()
            .with_transition(Transition::soft(0.5 * AU));
        assert_eq!(model.config().transition_width, 0.5 * AU);
        assert_eq!(model.transition().width(), Some(0.5 * AU));

        let hard = model.with_transition(Transition::hard());
        assert_eq!(hard.config().transition_width, 0.5 * AU);
        assert_eq!(hard.transition().width(), None);
    }

    #[test]
    fn test_model_metadata() {
        let model = SmoothFragmentationVelocity::default();
        assert_eq!(model.output(), PhysicalQuantity::FragmentationVelocity);
        assert_eq!(model.inputs().len(), 2);
        assert!(model.description().is_some());
    }
}
