//! Observation Request - Strict Validation
//!
//! Unlike the lenient classification path, a contamination request is
//! rejected outright when a field is missing, blank, unparseable, or the
//! date is malformed: an observation plan with a bad coordinate cannot be
//! salvaged by defaulting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fields::{get_f64, get_str, is_blank, FieldMap};

/// Fields every contamination request must carry.
pub const REQUIRED_FIELDS: &[&str] = &["ra", "dec", "observation_date", "fov", "mag_threshold"];

/// Validated observation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRequest {
    /// Right ascension of the field center (degrees).
    pub ra: f64,
    /// Declination of the field center (degrees).
    pub dec: f64,
    pub observation_date: NaiveDate,
    /// Field of view, angular diameter (degrees).
    pub fov: f64,
    /// Limiting magnitude of the observation.
    pub mag_threshold: f64,
}

impl ObservationRequest {
    /// Validate and parse a raw field map.
    pub fn from_fields(map: &FieldMap) -> Result<Self, CoreError> {
        for field in REQUIRED_FIELDS {
            if is_blank(map, field) {
                return Err(CoreError::InvalidInput(format!("missing field: {}", field)));
            }
        }

        let number = |key: &str| {
            get_f64(map, key)
                .ok_or_else(|| CoreError::InvalidInput(format!("invalid number: {}", key)))
        };

        let date_raw = get_str(map, "observation_date").ok_or_else(|| {
            CoreError::InvalidInput("invalid field: observation_date".to_string())
        })?;
        let observation_date =
            NaiveDate::parse_from_str(date_raw.trim(), "%Y-%m-%d").map_err(|_| {
                CoreError::InvalidInput(format!(
                    "invalid date (expected YYYY-MM-DD): {}",
                    date_raw
                ))
            })?;

        Ok(Self {
            ra: number("ra")?,
            dec: number("dec")?,
            observation_date,
            fov: number("fov")?,
            mag_threshold: number("mag_threshold")?,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
