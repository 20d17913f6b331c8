//! Untyped Field-Map Convention
//!
//! Every service accepts the same request shape: a JSON object mapping field
//! names to raw scalars (numbers or numeric-like strings). This module is the
//! only thing the three services share — the coercion rules from that loose
//! shape into typed numbers.

use serde_json::Value;

/// Raw request payload: field name → raw scalar.
pub type FieldMap = serde_json::Map<String, Value>;

/// Coerce a raw JSON scalar to `f64`.
///
/// Numbers pass through; strings are trimmed and parsed. Booleans, nulls,
/// arrays and objects do not coerce.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Read and coerce a field. `None` when absent or not numeric-like.
pub fn get_f64(map: &FieldMap, key: &str) -> Option<f64> {
    map.get(key).and_then(coerce_f64)
}

/// Read a field as a string, rendering bare numbers back to text.
pub fn get_str(map: &FieldMap, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// True when a field is missing or blank after trimming.
pub fn is_blank(map: &FieldMap, key: &str) -> bool {
    match map.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> FieldMap {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_f64(&json!(9.48)), Some(9.48));
        assert_eq!(coerce_f64(&json!(-5)), Some(-5.0));
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce_f64(&json!("  615.8 ")), Some(615.8));
        assert_eq!(coerce_f64(&json!("2.26")), Some(2.26));
    }

    #[test]
    fn test_coerce_garbage_is_none() {
        assert_eq!(coerce_f64(&json!("not a number")), None);
        assert_eq!(coerce_f64(&json!(true)), None);
        assert_eq!(coerce_f64(&json!(null)), None);
        assert_eq!(coerce_f64(&json!([1.0])), None);
    }

    #[test]
    fn test_get_f64_missing_key() {
        let m = map(json!({"koi_period": 9.48}));
        assert_eq!(get_f64(&m, "koi_period"), Some(9.48));
        assert_eq!(get_f64(&m, "koi_depth"), None);
    }

    #[test]
    fn test_is_blank() {
        let m = map(json!({"ra": "  ", "dec": 13.77, "fov": null}));
        assert!(is_blank(&m, "ra"));
        assert!(is_blank(&m, "fov"));
        assert!(is_blank(&m, "missing"));
        assert!(!is_blank(&m, "dec"));
    }

    #[test]
    fn test_get_str_renders_numbers() {
        let m = map(json!({"date": "2024-01-15", "fov": 1.5}));
        assert_eq!(get_str(&m, "date").as_deref(), Some("2024-01-15"));
        assert_eq!(get_str(&m, "fov").as_deref(), Some("1.5"));
    }
}
