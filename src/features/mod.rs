//! Features Module - Feature Spec & Vectorization
//!
//! Turns loosely-typed survey field maps into the fixed-order, clamped
//! numeric vector the trained classifier was fit on.
//!
//! - `spec`: ordered feature layout, clamp ranges, layout checksum
//! - `vectorize`: default-fill + coerce + clamp into spec order

pub mod spec;
pub mod vectorize;

// Re-export common types
pub use spec::{ClampRange, FeatureSpec, KEPLER_FEATURES};
pub use vectorize::vectorize;
