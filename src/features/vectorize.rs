//! Feature Vectorizer
//!
//! Maps a caller-supplied field map to the fixed-order numeric vector the
//! classifier expects, applying default-fill, coercion and per-feature
//! clamping in spec order.
//!
//! Lenient-default policy: a missing key defaults to 0 and an unparseable
//! value coerces to 0.0 instead of failing the request. Survey rows are
//! routinely gappy and the model was trained with median-filled columns, so
//! degrading a single bad feature beats rejecting the whole row. This is a
//! deliberate policy, not silent data loss masking; contamination assessment
//! validates strictly instead (see `contamination::request`).

use crate::fields::{coerce_f64, FieldMap};

use super::spec::FeatureSpec;

/// Vectorize a field map in spec order.
///
/// The output always has exactly `spec.len()` entries; feature order is
/// authoritative and matches the order the classifier was fit on.
pub fn vectorize(input: &FieldMap, spec: &FeatureSpec) -> Vec<f64> {
    let mut out = Vec::with_capacity(spec.len());
    for (i, name) in spec.names().iter().enumerate() {
        let raw = input.get(name.as_str()).and_then(coerce_f64).unwrap_or(0.0);
        let value = match spec.clamp_at(i) {
            Some(range) => range.clamp(raw),
            None => raw,
        };
        out.push(value);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
