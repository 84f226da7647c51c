//! snowline-rs: Smoothed parameters across the water snow line
//!
//! Dust evolution models of protoplanetary disks need a fragmentation
//! velocity that changes at the water snow line: ice-coated aggregates stick
//! at higher collision speeds than bare silicates. A hard jump at the snow
//! line produces grid-scale artifacts, so the value is blended with a
//! smoothed heaviside over a finite width instead.
//!
//! # Architecture
//!
//! The crate keeps the host simulation at arm's length:
//!
//! 1. **Physics containers** ([`physics`]): the host hands over a
//!    [`PhysicalState`](physics::PhysicalState) holding the radius grid and
//!    the gas temperature.
//! 2. **Models** ([`models`]): pure functions and [`PhysicalModel`](physics::PhysicalModel)
//!    implementations deriving new quantities from that state.
//!
//! # Quick Start
//!
//! ```rust
//! use snowline_rs::constants::AU;
//! use snowline_rs::models::smooth_vfrag;
//! use snowline_rs::physics::PhysicalState;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Disk snapshot: radius grid [cm] and gas temperature [K]
//! let radius: Vec<f64> = (1..=100).map(|i| 0.1 * i as f64 * AU).collect();
//! let temperature: Vec<f64> = radius.iter().map(|r| 280.0 * (r / AU).powf(-0.5)).collect();
//! let state = PhysicalState::disk(radius, temperature);
//!
//! // 2. Fragmentation velocity [cm/s], one value per cell
//! let v_frag = smooth_vfrag(&state)?;
//! assert_eq!(v_frag.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Data containers, state and model trait
//! - [`models`]: Smoothstep, snow line location, fragmentation velocity
//! - [`numerics`]: Interpolation, grid search, diagnostics, parallel threshold
//! - [`constants`]: Physical constants and defaults (cgs)
//!
//! # Features
//!
//! - `parallel`: element-wise work on large grids through rayon
//! - `serde`: (de)serialisation of [`FragmentationConfig`](models::FragmentationConfig)

// Core modules
pub mod constants;
pub mod numerics;
pub mod physics;

pub mod models;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use snowline_rs::prelude::*;
    //! ```
    pub use crate::physics::{PhysicalData,
                             PhysicalQuantity,
                             PhysicalState,
                             PhysicalModel};
    pub use crate::models::{smooth_vfrag,
                            FragmentationConfig,
                            SmoothFragmentationVelocity,
                            SnowLine,
                            Transition};
    pub use crate::models::smoothstep::smoothstep;
    pub use crate::constants::AU;
}
