//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: flexible state container
//! - `PhysicalQuantity`: type-safe quantity identifiers

use crate::physics::PhysicalData;
use std::collections::HashMap;
use std::fmt;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// All quantities are expressed in cgs units, the convention of dust
/// evolution codes.
///
/// # Enum type safety
///
/// If you need a quantity that is not listed here, use `Custom` rather than
/// a string key so that lookups stay type-checked.
///
/// # Example
/// ```
/// use snowline_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
///
/// let stokes = PhysicalQuantity::Custom("Stokes number");
/// let mut state = PhysicalState::empty();
///
/// state.set(stokes, PhysicalData::uniform_vector(100, 1e-3));
/// assert!(state.get(stokes).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Gas temperature (K)
    Temperature,

    /// Radial grid cell centers (cm)
    Radius,

    /// Fragmentation velocity threshold (cm/s)
    FragmentationVelocity,

    /// Gas surface density (g/cm²)
    SurfaceDensity,

    /// Custom quantity (for user extension)
    Custom(&'static str),
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalQuantity::Temperature => write!(f, "Temperature"),
            PhysicalQuantity::Radius => write!(f, "Radius"),
            PhysicalQuantity::FragmentationVelocity => write!(f, "Fragmentation velocity"),
            PhysicalQuantity::SurfaceDensity => write!(f, "Surface density"),
            PhysicalQuantity::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Physical State (Flexible State Container)
// =================================================================================================

/// Physical state of the disk
///
/// This structure holds every physical quantity known on the grid at a given
/// snapshot: radius grid, gas temperature, and anything a model derives from
/// them. Models read what they need and return their output in a new state.
///
/// # Example
/// ```
/// use snowline_rs::physics::{PhysicalQuantity, PhysicalState};
///
/// let state = PhysicalState::disk(
///     vec![1.0e13, 2.0e13, 3.0e13],
///     vec![250.0, 170.0, 120.0],
/// );
/// assert_eq!(state.get(PhysicalQuantity::Temperature).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PhysicalState {
    /// Physical quantities stored in a dictionary
    pub(crate) quantities: HashMap<PhysicalQuantity, PhysicalData>,

    /// Scalar metadata (optional, e.g. snow line radius, time)
    metadata: HashMap<String, f64>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, value: PhysicalData) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, value);

        Self {
            quantities,
            metadata: HashMap::new(),
        }
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self {
            quantities: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Create a disk snapshot from a radius grid \[cm\] and a gas
    /// temperature profile \[K\]
    ///
    /// Lengths are not checked here; models validate their inputs.
    pub fn disk(radius: Vec<f64>, temperature: Vec<f64>) -> Self {
        let mut state = Self::new(PhysicalQuantity::Radius, PhysicalData::from_vec(radius));
        state.set(PhysicalQuantity::Temperature, PhysicalData::from_vec(temperature));
        state
    }

    /// Get a quantity by type
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&PhysicalData> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a quantity
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut PhysicalData> {
        self.quantities.get_mut(&quantity)
    }

    /// Get a quantity or a descriptive error when missing
    pub fn require(&self, quantity: PhysicalQuantity) -> Result<&PhysicalData, String> {
        self.get(quantity)
            .ok_or_else(|| format!("{} is required but missing from the state", quantity))
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: PhysicalData) {
        self.quantities.insert(quantity, value);
    }

    /// Remove a quantity and return its data
    pub fn remove(&mut self, quantity: PhysicalQuantity) -> Option<PhysicalData> {
        self.quantities.remove(&quantity)
    }

    /// List of available physical state quantities
    pub fn available_quantities(&self) -> Vec<PhysicalQuantity> {
        self.quantities.keys().cloned().collect()
    }

    /// Get a metadata
    pub fn get_metadata(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).copied()
    }

    /// Set a metadata
    pub fn set_metadata(&mut self, key: String, value: f64) {
        self.metadata.insert(key, value);
    }
}

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Derives one quantity from the quantities already present in a
/// [`PhysicalState`]. A model never mutates its input; it returns a new
/// state holding its output (and any metadata it wants to report).
pub trait PhysicalModel: Send + Sync {

    /// Quantities read from the input state
    fn inputs(&self) -> Vec<PhysicalQuantity>;

    /// Quantity written to the output state
    fn output(&self) -> PhysicalQuantity;

    /// Computes the model output for a given state
    ///
    /// # Errors
    /// Returns a message when a required input is missing or inconsistent
    /// (e.g. radius and temperature of different lengths).
    fn compute_physics(&self, state: &PhysicalState) -> Result<PhysicalState, String>;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Check that every input quantity is present in `state`
    fn check_inputs(&self, state: &PhysicalState) -> Result<(), String> {
        for quantity in self.inputs() {
            state.require(quantity).map_err(|e| format!("{}: {}", self.name(), e))?;
        }
        Ok(())
    }
}
