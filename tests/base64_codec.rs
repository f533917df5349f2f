//! Integration tests for the Base64 codec.
//!
//! These tests verify standard padded encoding, strict rejection of malformed
//! input, and lossless round trips for text and binary payloads.

use toolbelt::{
    decode_base64, decode_base64_batch, decode_base64_bytes, encode_base64, encode_base64_bytes,
    is_valid_base64, DecodeError,
};


/// Test the known "Hello, World!" encoding and a rejected input.
#[test]
fn test_reference_scenarios() {
    assert_eq!(encode_base64("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(
        decode_base64("SGVsbG8sIFdvcmxkIQ==").unwrap(),
        "Hello, World!"
    );
    assert!(decode_base64("invalid-base64!").is_err());
}


/// Test the RFC 4648 section 10 vectors in both directions.
#[test]
fn test_rfc4648_vectors() {
    let vectors = [
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];

    for (plain, encoded) in vectors {
        assert_eq!(encode_base64(plain), encoded);
        assert_eq!(decode_base64(encoded).unwrap(), plain);
    }
}


/// Test that encoded output is always padded and unwrapped.
#[test]
fn test_output_is_padded_to_multiple_of_four() {
    for len in 0..32 {
        let text = "x".repeat(len);
        let encoded = encode_base64(&text);
        assert_eq!(encoded.len() % 4, 0, "length {}", len);
        assert!(!encoded.contains('\n'));
    }
}


/// Test roundtrip of multi-byte and control characters.
#[test]
fn test_roundtrip_unicode_and_control_characters() {
    let samples = ["日本語テキスト", "tab\tnewline\nnull\0", "emoji 🦀🚀", " leading space"];
    for sample in samples {
        assert_eq!(decode_base64(&encode_base64(sample)).unwrap(), sample);
    }
}


/// Test roundtrip of every byte value.
#[test]
fn test_binary_roundtrip() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    let encoded = encode_base64_bytes(&bytes);
    assert_eq!(decode_base64_bytes(&encoded).unwrap(), bytes);
}


/// Test that malformed input is rejected instead of skipped.
#[test]
fn test_strict_rejections() {
    let invalid = [
        "invalid-base64!", // characters outside the alphabet
        "SGVsbG8",         // length not a multiple of 4
        "SGVsbG8=A",       // data after padding
        "SGV=bG8=",        // padding in the middle
        "SGVs bG8=",       // embedded whitespace
        "SGVsbG8=\n",      // trailing newline
        "====",            // padding only
    ];

    for input in invalid {
        assert!(
            matches!(decode_base64(input), Err(DecodeError::Base64Error(_))),
            "should reject {:?}",
            input
        );
        assert!(!is_valid_base64(input));
    }
}


/// Test that a valid encoding of non-UTF-8 bytes fails text decoding.
#[test]
fn test_non_text_payload_is_a_decode_error() {
    // "/w==" decodes to the single byte 0xff
    assert_eq!(decode_base64_bytes("/w==").unwrap(), vec![0xff]);
    let err = decode_base64("/w==").unwrap_err();
    assert_eq!(err.to_string(), "Decoded bytes are not valid UTF-8");
}


/// Test parallel batch decoding.
#[test]
fn test_batch_decode() {
    let inputs: Vec<String> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|s| encode_base64(s))
        .collect();
    assert_eq!(
        decode_base64_batch(&inputs).unwrap(),
        vec!["alpha", "beta", "gamma"]
    );

    let mut broken = inputs.clone();
    broken.push("%%%%".to_string());
    assert!(decode_base64_batch(&broken).is_err());
}

/// Test that batch decoding reports the failure of the earliest bad input.
#[test]
fn test_batch_decode_reports_first_failing_input() {
    let mut inputs: Vec<String> = (0..100)
        .map(|i| encode_base64(&format!("ok {}", i)))
        .collect();
    inputs.push(encode_base64_bytes(&[0xc3, 0x28]));
    inputs.extend(std::iter::repeat("@@@@".to_string()).take(1000));

    for _ in 0..10 {
        let err = decode_base64_batch(&inputs).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8Error(_)), "got {:?}", err);
    }
}
