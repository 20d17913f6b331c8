//! ExoClassify Core - Exoplanet Inference & Scoring Pipeline
//!
//! Deterministic core behind the survey-analysis surface: classify candidate
//! transit signals with a frozen trained model, derive physical/habitability
//! properties, and score sky-field observation contamination.
//!
//! Three independent services, sharing only the untyped field-map convention:
//!
//! ```ignore
//! let artifacts = Arc::new(ModelArtifacts::load_dir(Path::new("model"))?);
//! let service = ClassificationService::new(Some(artifacts));
//!
//! let result = service.classify(&request_fields)?;
//! let profile = characterize(&SystemParams::from_fields(&request_fields));
//! let verdict = contamination::assess_fields(&request_fields)?;
//! ```
//!
//! HTTP routing, templates and CSV ingestion are external collaborators;
//! they map [`CoreError::status_hint`] to response statuses.

pub mod characterize;
pub mod classify;
pub mod constants;
pub mod contamination;
pub mod error;
pub mod features;
pub mod fields;
pub mod model;


// Re-export the service surface
pub use characterize::{characterize, PhysicalProfile, SystemParams};
pub use classify::{ClassificationResult, ClassificationService, ClassProbabilities};
pub use contamination::{assess_fields, ContaminationAssessment, ContaminationLevel};
pub use error::CoreError;
pub use features::{FeatureSpec, vectorize};
pub use fields::FieldMap;
pub use model::{Classifier, Disposition, ModelArtifacts, StandardScaler};
