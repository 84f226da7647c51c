//! Common utilities for integration tests

pub mod disks;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use disks::PowerLawDisk;
#[allow(unused_imports)]
pub use test_helpers::{assert_monotonic, relative_error};
