//! Characterization Types
//!
//! Data structures only - the formulas live in `physics`.

use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_YEAR, DEFAULT_ALBEDO, T_SUN_K};
use crate::fields::{get_f64, FieldMap};

// ============================================================================
// INPUT RECORD
// ============================================================================

/// Stellar + planetary parameters for one system.
///
/// Every field has a documented default (a Sun/Earth analog), applied when
/// the caller omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParams {
    /// Stellar effective temperature (K). Default: 5772 (solar).
    pub stellar_temp: f64,
    /// Stellar radius (solar radii). Default: 1.0.
    pub stellar_radius: f64,
    /// Stellar mass (solar masses). Default: 1.0.
    pub stellar_mass: f64,
    /// Orbital period (days). Default: 365.25.
    pub period: f64,
    /// Planet radius (Earth radii). Default: 1.0.
    pub radius: f64,
    /// Planet mass (Earth masses). Default: 1.0.
    pub planet_mass: f64,
    /// Insolation (S/S_earth). Default: 1.0.
    pub insolation: f64,
    /// Orbital eccentricity. Default: 0.0.
    pub eccentricity: f64,
    /// Bond albedo. Default: 0.3.
    pub albedo: f64,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            stellar_temp: T_SUN_K,
            stellar_radius: 1.0,
            stellar_mass: 1.0,
            period: DAYS_PER_YEAR,
            radius: 1.0,
            planet_mass: 1.0,
            insolation: 1.0,
            eccentricity: 0.0,
            albedo: DEFAULT_ALBEDO,
        }
    }
}

impl SystemParams {
    /// Build from an untyped field map.
    ///
    /// Lenient on purpose: a missing or unparseable field takes its default.
    /// The characterize surface has no error arm, so a bad value degrades to
    /// the analog default instead of failing the request.
    pub fn from_fields(map: &FieldMap) -> Self {
        let d = Self::default();
        Self {
            stellar_temp: get_f64(map, "stellar_temp").unwrap_or(d.stellar_temp),
            stellar_radius: get_f64(map, "stellar_radius").unwrap_or(d.stellar_radius),
            stellar_mass: get_f64(map, "stellar_mass").unwrap_or(d.stellar_mass),
            period: get_f64(map, "period").unwrap_or(d.period),
            radius: get_f64(map, "radius").unwrap_or(d.radius),
            planet_mass: get_f64(map, "planet_mass").unwrap_or(d.planet_mass),
            insolation: get_f64(map, "koi_insol").unwrap_or(d.insolation),
            eccentricity: get_f64(map, "eccentricity").unwrap_or(d.eccentricity),
            albedo: get_f64(map, "albedo").unwrap_or(d.albedo),
        }
    }
}

// ============================================================================
// CATEGORY ENUMS
// ============================================================================

/// Planet composition category by radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "rocoso")]
    Rocky,
    #[serde(rename = "transición")]
    Transitional,
    #[serde(rename = "gaseoso")]
    Gaseous,
}

impl PlanetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetType::Rocky => "rocoso",
            PlanetType::Transitional => "transición",
            PlanetType::Gaseous => "gaseoso",
        }
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Habitable-zone membership by insolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitableZone {
    #[serde(rename = "Conservadora")]
    Conservative,
    #[serde(rename = "Optimista")]
    Optimistic,
    #[serde(rename = "Fuera")]
    Outside,
}

impl HabitableZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitableZone::Conservative => "Conservadora",
            HabitableZone::Optimistic => "Optimista",
            HabitableZone::Outside => "Fuera",
        }
    }
}

impl std::fmt::Display for HabitableZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OUTPUT PROFILE
// ============================================================================

/// Derived physical quantities for one system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// Equilibrium temperature (K).
    pub teq: f64,
    pub planet_type: PlanetType,
    pub habitable_zone: HabitableZone,
    /// Geometric transit probability, in [0, 1].
    pub transit_probability: f64,
    /// Surface gravity (m/s²).
    pub surface_gravity: f64,
    /// Escape velocity (km/s).
    pub escape_velocity: f64,
    /// Composite habitability score, in [0, 1].
    pub habitability_score: f64,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: serde_json::Value) -> FieldMap {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_defaults_are_sun_earth_analog() {
        let p = SystemParams::default();
        assert_eq!(p.stellar_temp, 5772.0);
        assert_eq!(p.period, 365.25);
        assert_eq!(p.albedo, 0.3);
        assert_eq!(p.eccentricity, 0.0);
    }

    #[test]
    fn test_from_fields_fills_missing_with_defaults() {
        let p = SystemParams::from_fields(&fields(json!({"radius": 2.26, "period": "9.48"})));
        assert_eq!(p.radius, 2.26);
        assert_eq!(p.period, 9.48);
        assert_eq!(p.stellar_mass, 1.0);
        assert_eq!(p.insolation, 1.0);
    }

    #[test]
    fn test_from_fields_garbage_falls_back_to_default() {
        let p = SystemParams::from_fields(&fields(json!({"stellar_temp": "hot"})));
        assert_eq!(p.stellar_temp, 5772.0);
    }

    #[test]
    fn test_category_serde_labels() {
        assert_eq!(
            serde_json::to_value(PlanetType::Rocky).unwrap(),
            json!("rocoso")
        );
        assert_eq!(
            serde_json::to_value(HabitableZone::Conservative).unwrap(),
            json!("Conservadora")
        );
        assert_eq!(HabitableZone::Outside.to_string(), "Fuera");
    }
}
