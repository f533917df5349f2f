//! Standard Base64 encoding and strict decoding.
//!
//! Uses the RFC 4648 alphabet (`A-Z a-z 0-9 + /`) with `=` padding and no line
//! wrapping. Text is encoded as its UTF-8 bytes.
//!
//! Decoding is strict. Input is rejected when:
//! - its length is not a multiple of 4
//! - it contains a character outside the alphabet (whitespace included)
//! - padding appears anywhere other than the final one or two positions
//! - the decoded bytes are not valid UTF-8 (text decoding only)
//!
//! # Example
//!
//! ```
//! use toolbelt::{decode_base64, encode_base64};
//!
//! let encoded = encode_base64("Hello, World!");
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(decode_base64(&encoded).unwrap(), "Hello, World!");
//! assert!(decode_base64("invalid-base64!").is_err());
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when decoding Base64 input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid base64 encoding: {0}")]
    Base64Error(#[from] base64::DecodeError),
    #[error("Decoded bytes are not valid UTF-8")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Encode raw bytes as padded standard Base64.
#[inline]
pub fn encode_base64_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encode the UTF-8 bytes of `text` as padded standard Base64.
#[inline]
pub fn encode_base64(text: &str) -> String {
    encode_base64_bytes(text.as_bytes())
}

/// Decode padded standard Base64 into raw bytes.
pub fn decode_base64_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(encoded).map_err(|e| {
        debug!(error = %e, len = encoded.len(), "rejected base64 input");
        DecodeError::from(e)
    })
}

/// Decode padded standard Base64 into text.
///
/// Fails if the input is malformed or the payload is not UTF-8.
pub fn decode_base64(encoded: &str) -> Result<String, DecodeError> {
    let bytes = decode_base64_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| {
        debug!(error = %e, "base64 payload is not text");
        DecodeError::from(e)
    })
}

/// Check whether `encoded` is well-formed Base64 (payload may be any bytes).
pub fn is_valid_base64(encoded: &str) -> bool {
    decode_base64_bytes(encoded).is_ok()
}

/// Decode many inputs in parallel.
///
/// If any input fails, returns the error of the first failing input in input
/// order.
pub fn decode_base64_batch(encoded: &[String]) -> Result<Vec<String>, DecodeError> {
    let results: Vec<Result<String, DecodeError>> =
        encoded.par_iter().map(|text| decode_base64(text)).collect();
    results.into_iter().collect()
}
