//! Classification Service
//!
//! Orchestrates vectorize → scale → predict for one request. Stateless per
//! call; the only process-wide state is the immutable artifact bundle the
//! service was constructed with. Without a bundle the service reports
//! unavailability on every call - there is no per-request retry and no
//! heuristic fallback.

use std::sync::Arc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::features::vectorize;
use crate::fields::FieldMap;
use crate::model::{Disposition, ModelArtifacts, CLASS_COUNT};

/// Frozen training report for the shipped model, echoed with each result.
pub const MODEL_REPORT: &str = "
Classification Report:
                     precision    recall  f1-score   support

     False Positive       0.92      0.86      0.89       968
          Candidate       0.61      0.72      0.66       396
Confirmed Exoplanet       0.89      0.87      0.88       549

           accuracy                           0.83      1913
          macro avg       0.80      0.82      0.81      1913
       weighted avg       0.85      0.83      0.84      1913
";

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Per-class probability percentages, one decimal, in training index order.
///
/// Serializes keyed by display label so callers see
/// `{"False Positive": 12.3, "Candidate": 45.6, "Confirmed Exoplanet": 42.1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(rename = "False Positive")]
    pub false_positive: f64,
    #[serde(rename = "Candidate")]
    pub candidate: f64,
    #[serde(rename = "Confirmed Exoplanet")]
    pub confirmed_exoplanet: f64,
}

impl ClassProbabilities {
    /// Build from a raw probability row (fractions), rounding each class to
    /// a one-decimal percentage.
    pub fn from_row(row: &[f32]) -> Self {
        debug_assert_eq!(row.len(), CLASS_COUNT);
        let pct = |i: usize| round1(row.get(i).copied().unwrap_or(0.0) as f64 * 100.0);
        Self {
            false_positive: pct(Disposition::FalsePositive.class_index()),
            candidate: pct(Disposition::Candidate.class_index()),
            confirmed_exoplanet: pct(Disposition::ConfirmedExoplanet.class_index()),
        }
    }

    /// Percentage for one class.
    pub fn get(&self, class: Disposition) -> f64 {
        match class {
            Disposition::FalsePositive => self.false_positive,
            Disposition::Candidate => self.candidate,
            Disposition::ConfirmedExoplanet => self.confirmed_exoplanet,
        }
    }

    /// Largest class percentage.
    pub fn max(&self) -> f64 {
        Disposition::ALL
            .iter()
            .map(|c| self.get(*c))
            .fold(0.0, f64::max)
    }

    /// Sum of all class percentages (100 ± rounding).
    pub fn sum(&self) -> f64 {
        Disposition::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// One classification outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Predicted disposition class.
    pub prediction: Disposition,
    /// Display label of the prediction.
    pub prediction_label: String,
    /// Confidence percentage, one decimal. Equals `probabilities.max()`.
    pub confidence: f64,
    pub probabilities: ClassProbabilities,
    /// Frozen training report text.
    pub model_report: &'static str,
}

// ============================================================================
// SERVICE
// ============================================================================

/// Classification orchestration over an immutable artifact bundle.
pub struct ClassificationService {
    artifacts: Option<Arc<ModelArtifacts>>,
}

impl ClassificationService {
    /// `None` models the permanent artifact-load failure at startup.
    pub fn new(artifacts: Option<Arc<ModelArtifacts>>) -> Self {
        if artifacts.is_none() {
            log::warn!("classification service started without artifacts - permanently unavailable");
        }
        Self { artifacts }
    }

    pub fn is_available(&self) -> bool {
        self.artifacts.is_some()
    }

    /// Classify one field map.
    ///
    /// Fails with `ServiceUnavailable` when no artifact bundle is loaded and
    /// with `Internal` when scaling or inference faults - never a panic.
    /// Vectorization itself is lenient and cannot fail (see
    /// [`crate::features::vectorize`]).
    pub fn classify(&self, input: &FieldMap) -> Result<ClassificationResult, CoreError> {
        let artifacts = self.artifacts.as_ref().ok_or_else(|| {
            CoreError::ServiceUnavailable("no trained model loaded".to_string())
        })?;

        let vector = vectorize(input, &artifacts.spec);

        let scaled = match &artifacts.scaler {
            Some(scaler) => scaler
                .transform(&vector)
                .map_err(|e| CoreError::Internal(e.to_string()))?,
            None => vector,
        };

        // Single-row batch at the model boundary, f32 per the ONNX export.
        let row: Vec<f32> = scaled.iter().map(|v| *v as f32).collect();
        let batch = Array2::from_shape_vec((1, row.len()), row)
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        let prediction = artifacts
            .classifier
            .predict(&batch)?
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::Internal("classifier returned no prediction".to_string()))?;

        let proba = artifacts.classifier.predict_proba(&batch)?;
        let probabilities = ClassProbabilities::from_row(
            proba
                .row(0)
                .as_slice()
                .ok_or_else(|| CoreError::Internal("non-contiguous probability row".to_string()))?,
        );

        let confidence = probabilities.max();

        log::debug!(
            "classified as {} ({:.1}%)",
            prediction.as_str(),
            confidence
        );

        Ok(ClassificationResult {
            prediction,
            prediction_label: prediction.as_str().to_string(),
            confidence,
            probabilities,
            model_report: MODEL_REPORT,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSpec;
    use crate::model::{Classifier, InferenceError};
    use serde_json::json;

    /// Fixed-output classifier for orchestration tests.
    struct FixedClassifier {
        proba: [f32; CLASS_COUNT],
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, batch: &Array2<f32>) -> Result<Vec<Disposition>, InferenceError> {
            let top = self
                .proba
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap_or(0);
            Ok(vec![Disposition::from_class_index(top).unwrap(); batch.nrows()])
        }

        fn predict_proba(&self, batch: &Array2<f32>) -> Result<Array2<f32>, InferenceError> {
            let mut out = Array2::zeros((batch.nrows(), CLASS_COUNT));
            for mut row in out.rows_mut() {
                for (i, p) in self.proba.iter().enumerate() {
                    row[i] = *p;
                }
            }
            Ok(out)
        }
    }

    fn service_with(proba: [f32; CLASS_COUNT]) -> ClassificationService {
        let bundle = ModelArtifacts::new(
            Box::new(FixedClassifier { proba }),
            None,
            FeatureSpec::kepler_default(),
            "<mock>",
        )
        .unwrap();
        ClassificationService::new(Some(Arc::new(bundle)))
    }

    fn fields(v: serde_json::Value) -> FieldMap {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_unavailable_without_artifacts() {
        let service = ClassificationService::new(None);
        assert!(!service.is_available());

        let err = service.classify(&fields(json!({}))).unwrap_err();
        assert!(matches!(err, CoreError::ServiceUnavailable(_)));
        assert_eq!(err.status_hint(), 503);
    }

    #[test]
    fn test_confidence_equals_max_probability() {
        let service = service_with([0.107, 0.651, 0.242]);
        let result = service.classify(&fields(json!({"koi_period": 9.48}))).unwrap();

        assert_eq!(result.prediction, Disposition::Candidate);
        assert_eq!(result.confidence, result.probabilities.max());
        assert_eq!(result.confidence, 65.1);
    }

    #[test]
    fn test_probabilities_sum_near_100() {
        let service = service_with([0.333, 0.333, 0.334]);
        let result = service.classify(&fields(json!({}))).unwrap();
        assert!((result.probabilities.sum() - 100.0).abs() <= 0.2);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let service = service_with([0.12345, 0.54321, 0.33334]);
        let result = service.classify(&fields(json!({}))).unwrap();

        assert_eq!(result.probabilities.false_positive, 12.3);
        assert_eq!(result.probabilities.candidate, 54.3);
        assert_eq!(result.probabilities.confirmed_exoplanet, 33.3);
    }

    #[test]
    fn test_probabilities_serialize_by_label() {
        let p = ClassProbabilities {
            false_positive: 10.0,
            candidate: 20.0,
            confirmed_exoplanet: 70.0,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["False Positive"], 10.0);
        assert_eq!(json["Confirmed Exoplanet"], 70.0);
    }

    #[test]
    fn test_scaler_path_feeds_classifier() {
        let bundle = ModelArtifacts::new(
            Box::new(FixedClassifier {
                proba: [0.2, 0.3, 0.5],
            }),
            Some(
                crate::model::StandardScaler::new(vec![0.0; 12], vec![1.0; 12]).unwrap(),
            ),
            FeatureSpec::kepler_default(),
            "<mock>",
        )
        .unwrap();
        let service = ClassificationService::new(Some(Arc::new(bundle)));

        let result = service.classify(&fields(json!({"koi_period": 365.25}))).unwrap();
        assert_eq!(result.prediction, Disposition::ConfirmedExoplanet);
    }
}
