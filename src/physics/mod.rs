//! Physical models
//!
//! This module provides traits and containers for physical models.
//! A physical model derives one quantity of the disk (here the fragmentation
//! velocity) from quantities the host simulation already knows (radius grid,
//! gas temperature).
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes a derived quantity from a state
//! - **Physical State**: Container for all physical quantities (radius, temperature, etc.)
//! - **Physical Quantity**: Type-safe identifier for physical variables
//! - **Physical Data**: Scalar, vector, matrix or n-D array of values
//!
//! # Example
//!
//! ```rust
//! use snowline_rs::physics::{PhysicalModel, PhysicalQuantity, PhysicalState};
//! use snowline_rs::models::SmoothFragmentationVelocity;
//!
//! # fn main() -> Result<(), String> {
//! let state = PhysicalState::disk(
//!     vec![1.0e13, 2.0e13, 3.0e13, 4.0e13],
//!     vec![300.0, 200.0, 150.0, 100.0],
//! );
//!
//! let model = SmoothFragmentationVelocity::default();
//! let output = model.compute_physics(&state)?;
//!
//! assert!(output.get(PhysicalQuantity::FragmentationVelocity).is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Implementing a New Physical Model
//!
//! ```rust
//! use snowline_rs::physics::{PhysicalModel, PhysicalQuantity, PhysicalState};
//!
//! struct Isothermal;
//!
//! impl PhysicalModel for Isothermal {
//!     fn inputs(&self) -> Vec<PhysicalQuantity> {
//!         vec![PhysicalQuantity::Radius]
//!     }
//!
//!     fn output(&self) -> PhysicalQuantity {
//!         PhysicalQuantity::Temperature
//!     }
//!
//!     fn compute_physics(&self, state: &PhysicalState) -> Result<PhysicalState, String> {
//!         let radius = state.require(PhysicalQuantity::Radius)?;
//!         Ok(PhysicalState::new(self.output(), radius.map(|_| 150.0)))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Isothermal disk"
//!     }
//! }
//! ```

// module declaration
pub mod traits;
pub mod data;

// re-export commonly used types for convenience
pub use data::PhysicalData;
pub use traits::{
    PhysicalModel,
    PhysicalQuantity,
    PhysicalState,
};
