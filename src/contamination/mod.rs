//! Contamination Module - Sky-Field Observation Scoring
//!
//! Heuristic contamination verdict for a planned observation: Moon
//! proximity, bright-star density in the field, asteroid/satellite crossing
//! risk. Pure per request.
//!
//! - `request`: strict input validation (in contrast to the lenient
//!   classification path)
//! - `rules`: thresholds and densities
//! - `assess`: the verdict logic

pub mod assess;
pub mod request;
pub mod rules;

// Re-export main types
pub use assess::{assess, assess_fields, ContaminationAssessment, ContaminationLevel};
pub use request::ObservationRequest;
pub use rules::ContaminationThresholds;
