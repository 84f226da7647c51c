//! Physical constants and model defaults (cgs units)

/// Astronomical unit \[cm\]
pub const AU: f64 = 1.495_978_707e13;

/// Sublimation temperature of water ice \[K\]
pub const WATER_SUBLIMATION_TEMPERATURE: f64 = 170.0;

/// Default width of the snow line transition \[cm\] (0.25 AU)
pub const DEFAULT_TRANSITION_WIDTH: f64 = 0.25 * AU;

/// Fragmentation velocity of bare silicate grains inside the snow line \[cm/s\]
pub const V_FRAG_WARM: f64 = 100.0;

/// Fragmentation velocity of ice-coated grains outside the snow line \[cm/s\]
pub const V_FRAG_COLD: f64 = 1000.0;
