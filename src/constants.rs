//! Central Physical & Reference Constants
//!
//! Single source of truth for every physical constant and reference value
//! used by the characterization and contamination engines. Keeping them
//! named here keeps the formulas auditable and testable in isolation.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "ExoClassify";

// ============================================
// Solar / stellar reference values
// ============================================

/// Solar effective temperature (K). Default stellar temperature.
pub const T_SUN_K: f64 = 5772.0;

/// One solar radius expressed in astronomical units.
pub const RSUN_TO_AU: f64 = 0.00465047;

/// Days in one year, used by the Kepler-III period normalization.
pub const DAYS_PER_YEAR: f64 = 365.25;

// ============================================
// Earth reference values
// ============================================

/// Earth surface gravity (m/s²). Scales planetary surface gravity.
pub const G_EARTH: f64 = 9.80665;

/// Earth escape velocity (km/s). Scales planetary escape velocity.
pub const V_ESCAPE_EARTH: f64 = 11.186;

/// Default Bond albedo when the caller supplies none.
pub const DEFAULT_ALBEDO: f64 = 0.3;

// ============================================
// Field contamination reference values
// ============================================

/// Fixed reference Moon position, right ascension (degrees).
pub const MOON_REF_RA_DEG: f64 = 134.68;

/// Fixed reference Moon position, declination (degrees).
pub const MOON_REF_DEC_DEG: f64 = 13.77;
