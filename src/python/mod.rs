mod bindings;

use pyo3::prelude::*;

use crate::core::KM_PER_MILE;

/// Register the toolbelt functions on the `_core` extension module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bindings::tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::format_case, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::convert_case, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::convert_case_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::case_variants, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::encode_base64, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::decode_base64, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::miles_to_km, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::km_to_miles, m)?)?;
    m.add("KM_PER_MILE", KM_PER_MILE)?;
    Ok(())
}
