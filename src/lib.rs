pub mod core;
#[cfg(feature = "python")]
mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub use crate::core::{
    convert_case, convert_case_batch, convert_length, decode_base64, decode_base64_batch,
    decode_base64_bytes, encode_base64, encode_base64_bytes, format_case, is_valid_base64,
    km_to_miles, miles_to_km, tokenize, CaseVariant, DecodeError, LengthUnit, TokenSequence,
    ValidationError, KM_PER_MILE,
};

/// Toolbelt - text and data transformations for a browser toolbox
///
/// Exposes the pure routines behind the toolbox's converters:
/// - Word tokenization across camel, Pascal, snake, kebab and spaced text
/// - Case formatting into seven variants
/// - Strict standard Base64 encode/decode
/// - Miles/kilometers conversion with validation
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
