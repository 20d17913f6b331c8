//! Feature Spec - Ordered Layout & Clamp Ranges
//!
//! The feature order is fixed at model-training time and loaded as
//! configuration; it is the single source of truth for vector layout.
//! Changing the order without retraining silently breaks the model, so the
//! spec carries a CRC32 checksum over the ordered names for compatibility
//! checks against artifact metadata.

use std::collections::HashMap;
use std::path::Path;

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// KEPLER TRAINING LAYOUT
// ============================================================================

/// KOI feature columns in the exact order the frozen classifier was fit on.
pub const KEPLER_FEATURES: &[&str] = &[
    "koi_period",    // 0: orbital period (days)
    "koi_time0bk",   // 1: transit epoch (BKJD days)
    "koi_duration",  // 2: transit duration (hours)
    "koi_depth",     // 3: transit depth (ppm)
    "koi_prad",      // 4: planetary radius (Earth radii)
    "koi_teq",       // 5: equilibrium temperature (K)
    "koi_insol",     // 6: insolation (S/S_earth)
    "koi_steff",     // 7: stellar effective temperature (K)
    "koi_slogg",     // 8: stellar surface gravity (log10 cm/s²)
    "koi_srad",      // 9: stellar radius (solar radii)
    "koi_model_snr", // 10: transit model signal-to-noise
    "koi_score",     // 11: Kepler disposition score
];

/// Physically reasonable bounds per feature, applied after default-fill.
/// Features without an entry pass through unclamped.
static FEATURE_LIMITS: Lazy<HashMap<&'static str, ClampRange>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("koi_period", ClampRange::new(0.1, 1000.0)); // days
    m.insert("koi_time0bk", ClampRange::new(0.0, 10000.0)); // days
    m.insert("koi_impact", ClampRange::new(0.0, 1.0)); // unitless
    m.insert("koi_duration", ClampRange::new(0.1, 100.0)); // hours
    m.insert("koi_depth", ClampRange::new(0.0, 100000.0)); // ppm
    m.insert("koi_prad", ClampRange::new(0.1, 30.0)); // Earth radii
    m.insert("koi_srad", ClampRange::new(0.1, 10.0)); // solar radii
    m.insert("koi_smass", ClampRange::new(0.1, 5.0)); // solar masses
    m.insert("koi_steff", ClampRange::new(2000.0, 10000.0)); // K
    m.insert("koi_insol", ClampRange::new(0.0, 100.0)); // S/S_earth
    m.insert("koi_model_snr", ClampRange::new(0.0, 1000.0)); // SNR
    m.insert("koi_fpflag_nt", ClampRange::new(0.0, 1.0)); // flag
    m.insert("koi_fpflag_ss", ClampRange::new(0.0, 1.0)); // flag
    m.insert("koi_fpflag_co", ClampRange::new(0.0, 1.0)); // flag
    m.insert("koi_fpflag_ec", ClampRange::new(0.0, 1.0)); // flag
    m
});

// ============================================================================
// CLAMP RANGE
// ============================================================================

/// Inclusive `(min, max)` clamp range for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clip a value into the inclusive range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

// ============================================================================
// FEATURE SPEC
// ============================================================================

/// Error loading a feature spec from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("failed to read feature config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse feature config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feature config is empty")]
    Empty,
}

/// Ordered feature layout with per-feature clamp ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    names: Vec<String>,
    clamps: Vec<Option<ClampRange>>,
}

impl FeatureSpec {
    /// Build from an ordered name list, attaching built-in clamp ranges.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let clamps = names
            .iter()
            .map(|n| FEATURE_LIMITS.get(n.as_str()).copied())
            .collect();
        Self { names, clamps }
    }

    /// Load the ordered name list from a `feature_config.json` artifact
    /// (a plain JSON array of strings, as written at training time).
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let names: Vec<String> = serde_json::from_str(&raw)?;
        if names.is_empty() {
            return Err(SpecError::Empty);
        }
        Ok(Self::from_names(names))
    }

    /// The frozen Kepler training layout.
    pub fn kepler_default() -> Self {
        Self::from_names(KEPLER_FEATURES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Feature name at a layout index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Layout index of a feature name (O(n), features are few).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Clamp range at a layout index, if configured.
    pub fn clamp_at(&self, index: usize) -> Option<ClampRange> {
        self.clamps.get(index).copied().flatten()
    }

    /// CRC32 checksum over the ordered feature names.
    /// Order-sensitive: a reordered layout hashes differently.
    pub fn layout_hash(&self) -> u32 {
        let mut hasher = Hasher::new();
        for name in &self.names {
            hasher.update(name.as_bytes());
            hasher.update(&[0]); // separator
        }
        hasher.finalize()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepler_default_layout() {
        let spec = FeatureSpec::kepler_default();
        assert_eq!(spec.len(), 12);
        assert_eq!(spec.name(0), Some("koi_period"));
        assert_eq!(spec.name(11), Some("koi_score"));
        assert_eq!(spec.index_of("koi_insol"), Some(6));
        assert_eq!(spec.index_of("nonexistent"), None);
    }

    #[test]
    fn test_clamp_ranges_attached() {
        let spec = FeatureSpec::kepler_default();
        let period = spec.clamp_at(0).unwrap();
        assert_eq!(period.min, 0.1);
        assert_eq!(period.max, 1000.0);
        // koi_teq has no configured range
        assert!(spec.clamp_at(5).is_none());
    }

    #[test]
    fn test_clamp_range_clips_inclusive() {
        let r = ClampRange::new(0.1, 1000.0);
        assert_eq!(r.clamp(-5.0), 0.1);
        assert_eq!(r.clamp(5000.0), 1000.0);
        assert_eq!(r.clamp(0.1), 0.1);
        assert_eq!(r.clamp(42.0), 42.0);
    }

    #[test]
    fn test_layout_hash_consistency() {
        let spec = FeatureSpec::kepler_default();
        assert_ne!(spec.layout_hash(), 0);
        assert_eq!(spec.layout_hash(), FeatureSpec::kepler_default().layout_hash());
    }

    #[test]
    fn test_layout_hash_order_sensitive() {
        let a = FeatureSpec::from_names(["koi_period", "koi_depth"]);
        let b = FeatureSpec::from_names(["koi_depth", "koi_period"]);
        assert_ne!(a.layout_hash(), b.layout_hash());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feature_config.json");
        std::fs::write(&path, r#"["koi_period", "koi_prad"]"#).unwrap();

        let spec = FeatureSpec::from_json_file(&path).unwrap();
        assert_eq!(spec.names(), ["koi_period", "koi_prad"]);
        assert!(spec.clamp_at(1).is_some());
    }

    #[test]
    fn test_from_json_file_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feature_config.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(matches!(
            FeatureSpec::from_json_file(&path),
            Err(SpecError::Empty)
        ));
    }
}
