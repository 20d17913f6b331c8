//! Classifier Contract & Disposition Labels
//!
//! Data types and the capability trait only - no inference logic here.
//! Any deterministic, side-effect-free implementation of [`Classifier`]
//! satisfies the classification service unchanged.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Number of disposition classes the frozen model was trained on.
pub const CLASS_COUNT: usize = 3;

// ============================================================================
// DISPOSITION
// ============================================================================

/// KOI disposition classes, in training-time index order.
///
/// The discriminants match the class indices the classifier was fit on:
/// `FALSE POSITIVE` → 0, `CANDIDATE` → 1, `CONFIRMED` → 2. Probability rows
/// are indexed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    FalsePositive = 0,
    Candidate = 1,
    ConfirmedExoplanet = 2,
}

impl Disposition {
    /// All classes in training index order.
    pub const ALL: [Disposition; CLASS_COUNT] = [
        Disposition::FalsePositive,
        Disposition::Candidate,
        Disposition::ConfirmedExoplanet,
    ];

    /// Display label, as reported to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::FalsePositive => "False Positive",
            Disposition::Candidate => "Candidate",
            Disposition::ConfirmedExoplanet => "Confirmed Exoplanet",
        }
    }

    /// Training-time class index.
    pub fn class_index(&self) -> usize {
        *self as usize
    }

    /// Map a raw class index back to a disposition.
    pub fn from_class_index(index: usize) -> Option<Disposition> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Inference-layer failure (session, tensor shape, bad class index).
#[derive(Debug, thiserror::Error)]
#[error("inference error: {0}")]
pub struct InferenceError(pub String);

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Opaque trained multi-class classifier.
///
/// Both operations are deterministic and side-effect free. Each row of
/// `predict_proba` is a distribution over [`Disposition::ALL`] summing to 1
/// within floating tolerance.
pub trait Classifier: Send + Sync {
    /// Predicted class per batch row.
    fn predict(&self, batch: &Array2<f32>) -> Result<Vec<Disposition>, InferenceError>;

    /// Class probability distribution per batch row, shape `(rows, 3)`.
    fn predict_proba(&self, batch: &Array2<f32>) -> Result<Array2<f32>, InferenceError>;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_round_trip() {
        for class in Disposition::ALL {
            assert_eq!(Disposition::from_class_index(class.class_index()), Some(class));
        }
        assert_eq!(Disposition::from_class_index(3), None);
    }

    #[test]
    fn test_training_order() {
        assert_eq!(Disposition::FalsePositive.class_index(), 0);
        assert_eq!(Disposition::Candidate.class_index(), 1);
        assert_eq!(Disposition::ConfirmedExoplanet.class_index(), 2);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Disposition::FalsePositive.to_string(), "False Positive");
        assert_eq!(Disposition::ConfirmedExoplanet.as_str(), "Confirmed Exoplanet");
    }
}
