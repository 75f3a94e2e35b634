//! Secrets, derived keys and plaintext never appear in formatted output.

use legacy_cookie_core::{derive, CookieConfig, CookieDecryptor, CookieError, InvalidSession};

use crate::common::{self, FIXED_IV, SECRET};

#[test]
fn derived_key_debug_is_masked() {
    let key = derive(SECRET.as_bytes(), b"signed encrypted cookie");
    assert_eq!(format!("{key:?}"), "SecretBytes<32>(***)");
    assert_eq!(format!("{key}"), "SecretBytes<32>(***)");
}

#[test]
fn plaintext_debug_is_masked() {
    let cookie = common::issue(&common::pkcs7_pad(b"user_id=42"), &FIXED_IV);
    let plaintext = CookieDecryptor::new(CookieConfig::new(SECRET))
        .decrypt(&cookie)
        .unwrap();
    let debug = format!("{plaintext:?}");
    assert_eq!(debug, "Plaintext(***)");
    assert!(!debug.contains("user_id"));
}

#[test]
fn decryptor_debug_masks_config() {
    let decryptor = CookieDecryptor::new(CookieConfig::new("hunter2-secret-base"));
    let debug = format!("{decryptor:?}");
    assert!(!debug.contains("hunter2-secret-base"));
}

#[test]
fn error_messages_carry_no_cookie_bytes() {
    let raw = "c2VjcmV0LXBheWxvYWQ%3D--0123456789abcdef0123456789abcdef01234567";
    let err = CookieDecryptor::new(CookieConfig::new(SECRET))
        .decrypt(raw)
        .expect_err("unsigned cookie should be rejected");
    assert_eq!(err, CookieError::SignatureMismatch);
    let message = err.to_string();
    assert!(!message.contains("c2VjcmV0"));
    assert!(!message.contains("0123456789"));
}

#[test]
fn opaque_error_is_identical_for_every_stage() {
    let stages = [
        CookieError::MalformedEncoding { offset: 0 },
        CookieError::MalformedCookie("missing delimiter"),
        CookieError::InvalidTagEncoding { len: 1 },
        CookieError::SignatureMismatch,
        CookieError::InvalidBase64("iv"),
        CookieError::KeyTooShort { len: 0, min: 32 },
        CookieError::InvalidIvLength {
            len: 0,
            expected: 16,
        },
        CookieError::InvalidCiphertextLength { len: 1, block: 16 },
    ];
    let rendered: Vec<String> = stages
        .into_iter()
        .map(|e| InvalidSession::from(e).to_string())
        .collect();
    assert!(rendered.iter().all(|m| m == "invalid session"));
}
