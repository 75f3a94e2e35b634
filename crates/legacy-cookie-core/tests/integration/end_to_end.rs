//! Round trips through `decrypt_signed_cookie` with issuer-built cookies.

use legacy_cookie_core::{decrypt_signed_cookie, CookieError, Plaintext};
use rand::RngCore;

use crate::common::{self, ENC_SALT, FIXED_IV, SECRET, SIG_SALT};

const SESSION: &[u8] = br#"{"session_id":"9f2c1e","user_id":42,"_csrf_token":"abc"}"#;

fn open(raw: &str) -> Result<Plaintext, CookieError> {
    decrypt_signed_cookie(
        raw,
        SECRET.as_bytes(),
        ENC_SALT.as_bytes(),
        SIG_SALT.as_bytes(),
    )
}

#[test]
fn known_plaintext_round_trips_with_padding() {
    let padded = common::pkcs7_pad(SESSION);
    let cookie = common::issue(&padded, &FIXED_IV);

    let plaintext = open(&cookie).expect("issued cookie should decrypt");
    assert_eq!(plaintext.expose(), padded.as_slice());
    assert_eq!(plaintext.unpadded().unwrap(), SESSION);
}

#[test]
fn block_aligned_plaintext_gets_a_full_padding_block() {
    let session = [b'x'; 32];
    let padded = common::pkcs7_pad(&session);
    assert_eq!(padded.len(), 48);
    let cookie = common::issue(&padded, &FIXED_IV);

    let plaintext = open(&cookie).unwrap();
    assert_eq!(plaintext.len(), 48);
    assert_eq!(&plaintext.expose()[32..], &[16u8; 16]);
}

#[test]
fn random_ivs_round_trip() {
    let padded = common::pkcs7_pad(SESSION);
    for _ in 0..16 {
        let mut iv = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut iv);
        let cookie = common::issue(&padded, &iv);
        assert_eq!(open(&cookie).unwrap().expose(), padded.as_slice());
    }
}

#[test]
fn custom_salts_round_trip() {
    let padded = common::pkcs7_pad(b"custom");
    let cookie = common::issue_with(&padded, &FIXED_IV, "base", "enc-salt", "sig-salt");
    let plaintext = decrypt_signed_cookie(&cookie, b"base", b"enc-salt", b"sig-salt");
    let plaintext = plaintext.unwrap();
    assert_eq!(plaintext.expose(), padded.as_slice());
}

#[test]
fn cookie_signed_under_other_salt_is_rejected() {
    let padded = common::pkcs7_pad(SESSION);
    let cookie = common::issue_with(&padded, &FIXED_IV, SECRET, ENC_SALT, "other salt");
    assert!(matches!(open(&cookie), Err(CookieError::SignatureMismatch)));
}

#[test]
fn wrong_encryption_salt_decrypts_to_garbage_not_an_error() {
    // Only the signature is authenticated; CBC itself has no integrity check.
    let padded = common::pkcs7_pad(SESSION);
    let cookie = common::issue_with(&padded, &FIXED_IV, SECRET, "other salt", SIG_SALT);
    let plaintext = open(&cookie).expect("signature still matches");
    assert_eq!(plaintext.len(), padded.len());
    assert_ne!(plaintext.expose(), padded.as_slice());
}

#[test]
fn unescaped_plus_decodes_as_space() {
    // Standard base64 with a `+`; decodes to bytes without an inner `--`.
    let segment = "YQ+b";

    // Escaped as `%2B`: the signature holds and decoding moves past it.
    assert_eq!(
        open(&common::signed_wire(segment)).unwrap_err(),
        CookieError::MalformedCookie("missing delimiter")
    );

    // Sent raw: `+` turns into a space and the MAC no longer matches.
    let tag = common::sign_segment(segment, SECRET, SIG_SALT);
    let raw = format!("{segment}--{tag}");
    assert_eq!(open(&raw).unwrap_err(), CookieError::SignatureMismatch);
}
