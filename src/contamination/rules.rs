//! Contamination Rules & Thresholds
//!
//! Constants and configurable thresholds only - no assessment logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// BRIGHT-STAR DENSITY (stars per square degree by magnitude threshold)
// ============================================================================

/// Density when the magnitude threshold reaches deep stars (mag ≥ 15).
pub const DENSITY_DEEP: f64 = 50.0;

/// Density for intermediate thresholds (mag ≥ 12).
pub const DENSITY_MEDIUM: f64 = 10.0;

/// Density when only bright stars pass the threshold.
pub const DENSITY_BRIGHT: f64 = 2.0;

/// Magnitude cut for the deep density bucket.
pub const MAG_DEEP: f64 = 15.0;

/// Magnitude cut for the medium density bucket.
pub const MAG_MEDIUM: f64 = 12.0;

// ============================================================================
// CROSSING RISK
// ============================================================================

/// Risk fraction for a wide field with a deep magnitude threshold.
pub const RISK_HIGH: f64 = 0.5;

/// Risk fraction for a moderately wide field.
pub const RISK_MODERATE: f64 = 0.2;

/// FOV (degrees) above which crossing risk applies at all.
pub const RISK_FOV_MODERATE: f64 = 1.0;

/// FOV (degrees) above which, combined with `RISK_MAG_DEEP`, risk is high.
pub const RISK_FOV_WIDE: f64 = 2.0;

/// Magnitude threshold above which a wide field carries high crossing risk.
pub const RISK_MAG_DEEP: f64 = 14.0;

// ============================================================================
// VERDICT THRESHOLDS
// ============================================================================

/// Bright-star count above which a field is partially contaminated.
pub const BRIGHT_STAR_LIMIT: i64 = 30;

/// Crossing-risk fraction above which a field is partially contaminated.
pub const RISK_LIMIT: f64 = 0.3;

/// Days of month (inclusive range) that carry a lunar-phase caution.
pub const LUNAR_CAUTION_DAYS: (u32, u32) = (13, 16);

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Verdict thresholds (configurable for what-if analysis; the service uses
/// the defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContaminationThresholds {
    /// Bright-star count above which the field is partially contaminated.
    pub bright_star_limit: i64,
    /// Crossing-risk fraction above which the field is partially contaminated.
    pub risk_limit: f64,
}

impl Default for ContaminationThresholds {
    fn default() -> Self {
        Self {
            bright_star_limit: BRIGHT_STAR_LIMIT,
            risk_limit: RISK_LIMIT,
        }
    }
}
