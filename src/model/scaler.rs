//! Standard Scaler - Frozen Standardization Transform
//!
//! Applies the per-feature affine transform `(x - mean) / scale` with
//! parameters fit once at training time. The scaler is immutable
//! configuration - it is never refit at inference time.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error loading or applying scaler parameters.
#[derive(Debug, thiserror::Error)]
pub enum ScalerError {
    #[error("failed to read scaler config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse scaler config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scaler has {means} means but {scales} scales")]
    LengthMismatch { means: usize, scales: usize },
    #[error("scaler has zero scale at feature index {0}")]
    ZeroScale(usize),
    #[error("scaler expects {expected} features, vector has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Per-feature standardization parameters from training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Build from raw parameter vectors, rejecting degenerate configs.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ScalerError> {
        if mean.len() != scale.len() {
            return Err(ScalerError::LengthMismatch {
                means: mean.len(),
                scales: scale.len(),
            });
        }
        if let Some(i) = scale.iter().position(|s| *s == 0.0) {
            return Err(ScalerError::ZeroScale(i));
        }
        Ok(Self { mean, scale })
    }

    /// Load from a `scaler.json` artifact (`{"mean": [...], "scale": [...]}`).
    pub fn from_json_file(path: &Path) -> Result<Self, ScalerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScalerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let parsed: StandardScaler = serde_json::from_str(&raw)?;
        Self::new(parsed.mean, parsed.scale)
    }

    /// Number of features the scaler was fit on.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize one feature vector: `(x[i] - mean[i]) / scale[i]`.
    pub fn transform(&self, vector: &[f64]) -> Result<Vec<f64>, ScalerError> {
        if vector.len() != self.len() {
            return Err(ScalerError::DimensionMismatch {
                expected: self.len(),
                actual: vector.len(),
            });
        }
        Ok(vector
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
