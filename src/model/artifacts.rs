//! Artifact Bundle - Load-Once Model State
//!
//! The trained-artifact trio (classifier, scaler, feature spec) is loaded
//! once at process startup and treated as immutable for the process
//! lifetime. Concurrent requests share it by read; nothing refits or
//! reloads per request. If loading fails, the classification service
//! reports unavailability permanently rather than retrying.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::features::spec::SpecError;
use crate::features::FeatureSpec;

use super::classifier::{Classifier, InferenceError};
use super::onnx::OnnxClassifier;
use super::scaler::{ScalerError, StandardScaler};

/// File names inside an artifact directory, as written at training time.
pub const MODEL_FILE: &str = "exoplanet_model.onnx";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURE_CONFIG_FILE: &str = "feature_config.json";

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact directory not found: {0}")]
    MissingDirectory(String),
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Scaler(#[from] ScalerError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error("scaler was fit on {scaler} features but spec has {spec}")]
    ScalerSpecMismatch { scaler: usize, spec: usize },
}

// ============================================================================
// METADATA
// ============================================================================

/// Descriptive metadata for logging and status reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub model_path: String,
    pub feature_count: usize,
    pub layout_hash: u32,
    pub has_scaler: bool,
    pub loaded_at: DateTime<Utc>,
    /// Core version the bundle was loaded under.
    pub app_version: String,
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Immutable bundle of everything the classification service needs.
pub struct ModelArtifacts {
    pub classifier: Box<dyn Classifier>,
    pub scaler: Option<StandardScaler>,
    pub spec: FeatureSpec,
    pub metadata: ArtifactMetadata,
}

impl ModelArtifacts {
    /// Assemble a bundle from already-loaded parts (mock classifiers in
    /// tests come through here).
    pub fn new(
        classifier: Box<dyn Classifier>,
        scaler: Option<StandardScaler>,
        spec: FeatureSpec,
        model_path: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        if let Some(s) = &scaler {
            if s.len() != spec.len() {
                return Err(ArtifactError::ScalerSpecMismatch {
                    scaler: s.len(),
                    spec: spec.len(),
                });
            }
        }

        let metadata = ArtifactMetadata {
            model_path: model_path.into(),
            feature_count: spec.len(),
            layout_hash: spec.layout_hash(),
            has_scaler: scaler.is_some(),
            loaded_at: Utc::now(),
            app_version: APP_VERSION.to_string(),
        };

        Ok(Self {
            classifier,
            scaler,
            spec,
            metadata,
        })
    }

    /// Load the bundle from an artifact directory containing
    /// `exoplanet_model.onnx`, `feature_config.json` and (optionally)
    /// `scaler.json`.
    pub fn load_dir(dir: &Path) -> Result<Self, ArtifactError> {
        if !dir.is_dir() {
            return Err(ArtifactError::MissingDirectory(dir.display().to_string()));
        }

        let model_path = dir.join(MODEL_FILE);
        let classifier = OnnxClassifier::from_file(&model_path.display().to_string())?;

        let spec = FeatureSpec::from_json_file(&dir.join(FEATURE_CONFIG_FILE))?;

        let scaler_path = dir.join(SCALER_FILE);
        let scaler = if scaler_path.exists() {
            Some(StandardScaler::from_json_file(&scaler_path)?)
        } else {
            log::warn!("no scaler.json in {}, vectors pass through unscaled", dir.display());
            None
        };

        let bundle = Self::new(
            Box::new(classifier),
            scaler,
            spec,
            model_path.display().to_string(),
        )?;

        log::info!(
            "{} v{}: artifact bundle loaded: {} features (layout {:08x}), scaler: {}",
            APP_NAME,
            APP_VERSION,
            bundle.metadata.feature_count,
            bundle.metadata.layout_hash,
            bundle.metadata.has_scaler,
        );

        Ok(bundle)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Disposition;
    use ndarray::Array2;

    struct NoopClassifier;

    impl Classifier for NoopClassifier {
        fn predict(&self, batch: &Array2<f32>) -> Result<Vec<Disposition>, InferenceError> {
            Ok(vec![Disposition::Candidate; batch.nrows()])
        }

        fn predict_proba(&self, batch: &Array2<f32>) -> Result<Array2<f32>, InferenceError> {
            Ok(Array2::from_elem((batch.nrows(), 3), 1.0 / 3.0))
        }
    }

    #[test]
    fn test_bundle_metadata() {
        let spec = FeatureSpec::kepler_default();
        let hash = spec.layout_hash();
        let bundle =
            ModelArtifacts::new(Box::new(NoopClassifier), None, spec, "<test>").unwrap();

        assert_eq!(bundle.metadata.feature_count, 12);
        assert_eq!(bundle.metadata.layout_hash, hash);
        assert!(!bundle.metadata.has_scaler);
        assert_eq!(bundle.metadata.app_version, APP_VERSION);
        assert!(!APP_NAME.is_empty());
    }

    #[test]
    fn test_scaler_spec_mismatch_rejected() {
        let spec = FeatureSpec::kepler_default();
        let scaler = StandardScaler::new(vec![0.0; 4], vec![1.0; 4]).unwrap();

        let result = ModelArtifacts::new(Box::new(NoopClassifier), Some(scaler), spec, "<test>");
        assert!(matches!(
            result,
            Err(ArtifactError::ScalerSpecMismatch { scaler: 4, spec: 12 })
        ));
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let result = ModelArtifacts::load_dir(Path::new("/nonexistent/artifacts"));
        assert!(matches!(result, Err(ArtifactError::MissingDirectory(_))));
    }

    #[test]
    fn test_load_dir_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FEATURE_CONFIG_FILE), r#"["koi_period"]"#).unwrap();

        let result = ModelArtifacts::load_dir(dir.path());
        assert!(matches!(result, Err(ArtifactError::Inference(_))));
    }
}
