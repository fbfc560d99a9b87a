//! Lenient extraction of typed values from a JSON parameter object.
//!
//! Used to overlay user-supplied `--params` JSON on top of a preset. A missing
//! key or a value of the wrong type falls back to the supplied default, so
//! these helpers never fail.

use serde_json::Value;

/// Reads `params[name]` as `f64`. Integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads `params[name]` as a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Reads `params[name]` as a string slice.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}
