// ABOUTME: Total, panic-free field accessors over semi-structured JSON documents
// ABOUTME: Absence is the only failure signal so endpoint parsers compose without error plumbing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Safe field extractors
//!
//! Fitbit payloads are semi-structured: fields go missing, change numeric
//! representation between API versions, and arrays arrive empty. Every
//! accessor here returns `Some` only when the field exists and converts to
//! the requested kind without ambiguity; a missing field, a wrong shape, and
//! an empty array are all plain `None`.

use serde_json::Value;

/// Read `field` as a signed integer.
///
/// Accepts integral numbers directly and in-range floating-point numbers by
/// truncation toward zero, mirroring numeric convertibility rather than the
/// JSON type tag.
#[must_use]
pub fn opt_i64(node: &Value, field: &str) -> Option<i64> {
    let v = node.get(field)?;
    let n = v.as_number()?;
    n.as_i64().or_else(|| {
        let f = n.as_f64()?;
        (f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
    })
}

/// Read `field` as a floating-point number. Integral numbers widen.
#[must_use]
pub fn opt_f64(node: &Value, field: &str) -> Option<f64> {
    node.get(field)?.as_f64()
}

/// Read `field` as a boolean. No coercion from strings or numbers.
#[must_use]
pub fn opt_bool(node: &Value, field: &str) -> Option<bool> {
    node.get(field)?.as_bool()
}

/// Read `field` as text. No coercion from numbers.
#[must_use]
pub fn opt_str<'a>(node: &'a Value, field: &str) -> Option<&'a str> {
    node.get(field)?.as_str()
}

/// Read `field` as a nested object node.
#[must_use]
pub fn opt_object<'a>(node: &'a Value, field: &str) -> Option<&'a Value> {
    let v = node.get(field)?;
    v.is_object().then_some(v)
}

/// Read `field` as a non-empty array. A present but empty array is absent.
#[must_use]
pub fn opt_array<'a>(node: &'a Value, field: &str) -> Option<&'a [Value]> {
    let v = node.get(field)?.as_array()?;
    (!v.is_empty()).then_some(v.as_slice())
}
