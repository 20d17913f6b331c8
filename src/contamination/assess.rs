//! Contamination Assessor
//!
//! Ordered rule evaluation over a validated observation plan. The verdict
//! precedence is fixed: Moon proximity beats bright-star density beats a
//! clean field, and the lunar-phase caution is appended independently of
//! the verdict.

use serde::{Deserialize, Serialize};

use chrono::Datelike;

use crate::constants::{MOON_REF_DEC_DEG, MOON_REF_RA_DEG};
use crate::error::CoreError;
use crate::fields::FieldMap;

use super::request::ObservationRequest;
use super::rules::{
    ContaminationThresholds, DENSITY_BRIGHT, DENSITY_DEEP, DENSITY_MEDIUM, LUNAR_CAUTION_DAYS,
    MAG_DEEP, MAG_MEDIUM, RISK_FOV_MODERATE, RISK_FOV_WIDE, RISK_HIGH, RISK_MAG_DEEP,
    RISK_MODERATE,
};

// ============================================================================
// LEVEL
// ============================================================================

/// Qualitative contamination verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationLevel {
    Clean,
    PartiallyContaminated,
    HighlyContaminated,
}

impl ContaminationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContaminationLevel::Clean => "clean",
            ContaminationLevel::PartiallyContaminated => "partially_contaminated",
            ContaminationLevel::HighlyContaminated => "highly_contaminated",
        }
    }

    /// UI severity color for the verdict.
    pub fn color(&self) -> &'static str {
        match self {
            ContaminationLevel::Clean => "success",
            ContaminationLevel::PartiallyContaminated => "warning",
            ContaminationLevel::HighlyContaminated => "danger",
        }
    }
}

impl std::fmt::Display for ContaminationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Full contamination verdict for one observation plan.
#[derive(Debug, Clone, Serialize)]
pub struct ContaminationAssessment {
    pub level: ContaminationLevel,
    /// UI severity color for the verdict.
    pub color: &'static str,
    /// Angular separation to the reference Moon position, degrees (2 dp).
    pub distance_to_moon_deg: f64,
    pub bright_star_estimate: i64,
    /// Asteroid/satellite crossing-risk fraction.
    pub risk_fraction: f64,
    /// Ordered, verdict-specific recommendations.
    pub recommendations: Vec<String>,
    /// Caveat on the estimation method.
    pub note: &'static str,
    /// One-line human summary.
    pub summary: String,
}

const METHOD_NOTE: &str = "This analysis is an estimate based on public data and \
simplified heuristics; crossing contaminants include asteroids and satellites.";

// ============================================================================
// GEOMETRY & HEURISTICS
// ============================================================================

/// Angular separation between two sky positions (degrees), via the spherical
/// law of cosines. The cosine is clamped to [-1, 1] before `acos` so floating
/// rounding near coincident points cannot leave the domain.
pub fn angular_distance_deg(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let (ra1, dec1) = (ra1.to_radians(), dec1.to_radians());
    let (ra2, dec2) = (ra2.to_radians(), dec2.to_radians());
    let cos_d = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_d.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Bright stars expected in the field: density bucket by magnitude threshold
/// times the field area, floored to a count.
pub fn bright_star_estimate(fov_deg: f64, mag_threshold: f64) -> i64 {
    let density = if mag_threshold >= MAG_DEEP {
        DENSITY_DEEP
    } else if mag_threshold >= MAG_MEDIUM {
        DENSITY_MEDIUM
    } else {
        DENSITY_BRIGHT
    };
    let area = std::f64::consts::PI * (fov_deg / 2.0).powi(2);
    (density * area).floor() as i64
}

/// Asteroid/satellite crossing-risk fraction for the field geometry.
pub fn crossing_risk(fov_deg: f64, mag_threshold: f64) -> f64 {
    if fov_deg > RISK_FOV_WIDE && mag_threshold > RISK_MAG_DEEP {
        RISK_HIGH
    } else if fov_deg > RISK_FOV_MODERATE {
        RISK_MODERATE
    } else {
        0.0
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ============================================================================
// ASSESSMENT LOGIC
// ============================================================================

/// Assess a validated observation plan with custom thresholds.
pub fn assess_with_thresholds(
    request: &ObservationRequest,
    thresholds: &ContaminationThresholds,
) -> ContaminationAssessment {
    let dist_moon = angular_distance_deg(
        request.ra,
        request.dec,
        MOON_REF_RA_DEG,
        MOON_REF_DEC_DEG,
    );
    let bright_stars = bright_star_estimate(request.fov, request.mag_threshold);
    let risk = crossing_risk(request.fov, request.mag_threshold);

    let mut recommendations = Vec::new();

    // Verdict precedence: Moon proximity first, then field density/risk.
    let level = if dist_moon < request.fov {
        recommendations.push("Change the observation date to avoid the Moon.".to_string());
        ContaminationLevel::HighlyContaminated
    } else if bright_stars > thresholds.bright_star_limit || risk > thresholds.risk_limit {
        if bright_stars > thresholds.bright_star_limit {
            recommendations
                .push("Narrow the field of view to avoid bright stars.".to_string());
        }
        if risk > thresholds.risk_limit {
            recommendations.push(
                "Check for asteroid/satellite crossings over the field.".to_string(),
            );
        }
        recommendations.push("Consider using optical filters.".to_string());
        ContaminationLevel::PartiallyContaminated
    } else {
        recommendations.push("Conditions optimal for observation.".to_string());
        ContaminationLevel::Clean
    };

    // Mid-month nights tend to fall near full Moon; caution regardless of verdict.
    let day = request.observation_date.day();
    if day >= LUNAR_CAUTION_DAYS.0 && day <= LUNAR_CAUTION_DAYS.1 {
        recommendations.push("The Moon may be bright; check the lunar phase.".to_string());
    }

    let distance_to_moon_deg = round2(dist_moon);
    let summary = format!(
        "Level: {}. Moon separation: {}°. Bright stars: {}. Crossing risk: {}%.",
        level,
        distance_to_moon_deg,
        bright_stars,
        (risk * 100.0) as i64,
    );

    log::debug!("field assessment: {}", summary);

    ContaminationAssessment {
        level,
        color: level.color(),
        distance_to_moon_deg,
        bright_star_estimate: bright_stars,
        risk_fraction: risk,
        recommendations,
        note: METHOD_NOTE,
        summary,
    }
}

/// Assess a validated observation plan with default thresholds.
pub fn assess(request: &ObservationRequest) -> ContaminationAssessment {
    assess_with_thresholds(request, &ContaminationThresholds::default())
}

/// Validate a raw field map and assess it. `InvalidInput` on bad input.
pub fn assess_fields(map: &FieldMap) -> Result<ContaminationAssessment, CoreError> {
    let request = ObservationRequest::from_fields(map)?;
    Ok(assess(&request))
}

// ============================================================================
// TESTS
// ============================================================================
