//! Snow line models
//!
//! # Available Models
//!
//! ## [`SmoothFragmentationVelocity`]
//!
//! Fragmentation velocity blended across the water snow line. Implements
//! [`PhysicalModel`](crate::physics::PhysicalModel): reads the radius grid and
//! gas temperature of a disk state, writes the fragmentation velocity.
//!
//! # Building blocks
//!
//! - [`smoothstep`](smoothstep::smoothstep): the smoothed heaviside itself, on
//!   scalars, slices or [`PhysicalData`](crate::physics::PhysicalData)
//! - [`Transition`]: step shape (soft, hard or user-defined)
//! - [`SnowLine`]: radius where the gas temperature crosses a target value

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod smoothstep;
pub mod snowline;
pub mod fragmentation;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use smoothstep::{smoothstep_data, smoothstep_series, Transition};
pub use snowline::SnowLine;
pub use fragmentation::{smooth_vfrag, FragmentationConfig, SmoothFragmentationVelocity};
