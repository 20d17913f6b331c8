//! Model Module - Inference Artifact Adapters
//!
//! Wraps the frozen training artifacts (classifier, scaler, feature spec)
//! behind capability interfaces so the classification service never touches
//! a concrete model type.
//!
//! - `classifier`: `Disposition` labels + opaque `Classifier` trait
//! - `scaler`: frozen standardization transform
//! - `onnx`: ONNX Runtime implementation of `Classifier`
//! - `artifacts`: load-once immutable bundle

pub mod artifacts;
pub mod classifier;
pub mod onnx;
pub mod scaler;

// Re-export common types
pub use artifacts::{ArtifactError, ArtifactMetadata, ModelArtifacts};
pub use classifier::{Classifier, Disposition, InferenceError, CLASS_COUNT};
pub use onnx::OnnxClassifier;
pub use scaler::StandardScaler;
