//! Characterization Module - Physical & Habitability Properties
//!
//! Pure derivation of physical quantities from stellar + planetary
//! parameters. No state, no I/O - every profile is recomputed per request.
//!
//! - `types`: input record with documented defaults, category enums, profile
//! - `physics`: the formulas

pub mod physics;
pub mod types;

// Re-export common types
pub use physics::characterize;
pub use types::{HabitableZone, PhysicalProfile, PlanetType, SystemParams};
