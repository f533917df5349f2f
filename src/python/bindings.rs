//! Python bindings for the toolbelt core.
//!
//! This module provides PyO3 wrappers around the core Rust routines so the
//! toolbox front end can call them from Python. Case variants cross the
//! boundary as names (`"camel"`, `"snake"`, ...) or display labels
//! (`"camelCase"`, `"snake_case"`, ...).
//!
//! Every library error is raised as `ValueError` carrying the Rust error
//! message, so validation messages such as "Miles cannot be negative" reach
//! the caller verbatim.
//!
//! # Example
//!
//! ```python
//! from toolbelt import _core as tb
//!
//! tb.convert_case("hello world test", "camel")   # "helloWorldTest"
//! tb.encode_base64("Hello, World!")              # "SGVsbG8sIFdvcmxkIQ=="
//! tb.miles_to_km(10)                             # 16.0934
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::CaseVariant;

fn parse_variant(name: &str) -> PyResult<CaseVariant> {
    CaseVariant::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = CaseVariant::ALL.iter().map(|v| v.name()).collect();
        PyValueError::new_err(format!(
            "Unknown case variant: {}. Expected one of: {}",
            name,
            known.join(", ")
        ))
    })
}

fn value_error<E: std::fmt::Display>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Split text into lowercase word tokens.
///
/// Args:
///     text: Input text in any case style
///
/// Returns:
///     List of lowercase words
#[pyfunction]
pub fn tokenize(text: &str) -> Vec<String> {
    crate::core::tokenize(text)
}

/// Join tokens in the given case variant.
///
/// Args:
///     tokens: Words to join
///     variant: Variant name or label
///
/// Raises:
///     ValueError: If the variant is unknown
#[pyfunction]
pub fn format_case(tokens: Vec<String>, variant: &str) -> PyResult<String> {
    Ok(crate::core::format_case(&tokens, parse_variant(variant)?))
}

/// Tokenize text and join it in the given case variant.
///
/// Args:
///     text: Input text in any case style
///     variant: Variant name or label
///
/// Raises:
///     ValueError: If the variant is unknown
#[pyfunction]
pub fn convert_case(text: &str, variant: &str) -> PyResult<String> {
    Ok(crate::core::convert_case(text, parse_variant(variant)?))
}

/// Convert many texts in parallel.
///
/// Releases the GIL while Rayon runs the conversions.
///
/// Args:
///     texts: Input texts
///     variant: Variant name or label
///
/// Returns:
///     Converted texts, in input order
#[pyfunction]
pub fn convert_case_batch(
    py: Python<'_>,
    texts: Vec<String>,
    variant: &str,
) -> PyResult<Vec<String>> {
    let variant = parse_variant(variant)?;
    Ok(py.allow_threads(|| crate::core::convert_case_batch(&texts, variant)))
}

/// List the supported case variants.
///
/// Returns:
///     List of (name, label) tuples in display order
#[pyfunction]
pub fn case_variants() -> Vec<(&'static str, &'static str)> {
    CaseVariant::ALL
        .iter()
        .map(|variant| (variant.name(), variant.label()))
        .collect()
}

/// Encode text as standard padded Base64.
#[pyfunction]
pub fn encode_base64(text: &str) -> String {
    crate::core::encode_base64(text)
}

/// Decode standard padded Base64 into text.
///
/// Raises:
///     ValueError: If the input is not valid Base64 or not UTF-8 text
#[pyfunction]
pub fn decode_base64(encoded: &str) -> PyResult<String> {
    crate::core::decode_base64(encoded).map_err(value_error)
}

/// Convert miles to kilometers, rounded to 4 decimal places.
///
/// Raises:
///     ValueError: If miles is negative or not finite
#[pyfunction]
pub fn miles_to_km(miles: f64) -> PyResult<f64> {
    crate::core::miles_to_km(miles).map_err(value_error)
}

/// Convert kilometers to miles.
///
/// Raises:
///     ValueError: If km is negative or not finite
#[pyfunction]
pub fn km_to_miles(km: f64) -> PyResult<f64> {
    crate::core::km_to_miles(km).map_err(value_error)
}
