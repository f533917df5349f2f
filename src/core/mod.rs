//! Core transformation routines for toolbelt.
//!
//! Everything in this module is pure and stateless: every function depends only
//! on its arguments, so all of it can be called from any thread.
//!
//! # Architecture
//!
//! The core is organized into four components:
//!
//! - [`tokenize`]: splits text into lowercase words on delimiters, case
//!   transitions, letter/digit transitions and acronym boundaries
//! - [`format_case`] / [`CaseVariant`]: joins words as UPPER, lower, Title,
//!   camel, Pascal, snake or kebab case
//! - [`codec`]: standard Base64 encoding with strict decoding
//! - [`units`]: miles/kilometers conversion with input validation
//!
//! Text conversion is a two-step pipeline, `format_case(&tokenize(text), variant)`,
//! available in one call as [`convert_case`]. The codec and unit functions are
//! independent leaves.
//!
//! Batch variants use Rayon to spread independent inputs across cores.

mod case;
pub mod codec;
mod tokenizer;
pub mod units;

pub use case::{convert_case, convert_case_batch, format_case, CaseVariant};
pub use codec::{
    decode_base64, decode_base64_batch, decode_base64_bytes, encode_base64, encode_base64_bytes,
    is_valid_base64, DecodeError,
};
pub use tokenizer::{tokenize, TokenSequence};
pub use units::{
    convert_length, km_to_miles, miles_to_km, round_to_places, LengthUnit, ValidationError,
    KM_PER_MILE,
};
