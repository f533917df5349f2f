//! Fixed-ratio length conversion between miles and kilometers.
//!
//! `miles_to_km` rounds to [`KM_DECIMAL_PLACES`] decimal places;
//! `km_to_miles` returns the unrounded quotient. Negative and non-finite
//! inputs are rejected with a [`ValidationError`] naming the unit.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Kilometers in one international mile, to five decimal places.
pub const KM_PER_MILE: f64 = 1.60934;

/// Precision of [`miles_to_km`] results.
pub const KM_DECIMAL_PLACES: u32 = 4;

/// Unit context of a quantity passed to a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Miles,
    Kilometers,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Miles => "Miles",
            Self::Kilometers => "Kilometers",
        })
    }
}

/// Rejected conversion input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be negative")]
    Negative(LengthUnit),
    #[error("{0} must be a finite number")]
    NotFinite(LengthUnit),
}

impl ValidationError {
    /// Unit of the rejected input.
    pub fn unit(&self) -> LengthUnit {
        match self {
            Self::Negative(unit) | Self::NotFinite(unit) => *unit,
        }
    }
}

fn validate(value: f64, unit: LengthUnit) -> Result<f64, ValidationError> {
    let err = if !value.is_finite() {
        ValidationError::NotFinite(unit)
    } else if value < 0.0 {
        ValidationError::Negative(unit)
    } else {
        // normalizes -0.0 to 0.0
        return Ok(value + 0.0);
    };
    debug!(value, %unit, "rejected conversion input");
    Err(err)
}

/// Round half away from zero to `places` decimal places.
///
/// Values too large to scale have no fractional digits left and are returned
/// unchanged.
#[inline]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Convert miles to kilometers, rounded to four decimal places.
///
/// # Example
/// ```
/// use toolbelt::miles_to_km;
///
/// assert_eq!(miles_to_km(10.0).unwrap(), 16.0934);
/// assert_eq!(
///     miles_to_km(-1.0).unwrap_err().to_string(),
///     "Miles cannot be negative"
/// );
/// ```
pub fn miles_to_km(miles: f64) -> Result<f64, ValidationError> {
    let miles = validate(miles, LengthUnit::Miles)?;
    Ok(round_to_places(miles * KM_PER_MILE, KM_DECIMAL_PLACES))
}

/// Convert kilometers to miles. The result is not rounded.
pub fn km_to_miles(km: f64) -> Result<f64, ValidationError> {
    let km = validate(km, LengthUnit::Kilometers)?;
    Ok(km / KM_PER_MILE)
}

/// Convert `value` from one unit to another.
///
/// Same-unit conversion validates the input and returns it unchanged.
pub fn convert_length(
    value: f64,
    from: LengthUnit,
    to: LengthUnit,
) -> Result<f64, ValidationError> {
    match (from, to) {
        (LengthUnit::Miles, LengthUnit::Kilometers) => miles_to_km(value),
        (LengthUnit::Kilometers, LengthUnit::Miles) => km_to_miles(value),
        (unit, _) => validate(value, unit),
    }
}
