//! A fixed cookie issued outside this crate.
//!
//! Built with an independent PBKDF2/HMAC/AES stack from:
//!
//! - `secret_key_base = "s3cr3t"` with the default salts
//! - IV `00 01 02 .. 0f`
//! - plaintext `{"session_id":"abc","_csrf_token":"xyz=="}` plus PKCS#7 padding

use legacy_cookie_core::{decrypt_signed_cookie, CookieError};

const COOKIE: &str = concat!(
    "R2IreDdwcHFYelY4eXcvcFZVYXQvNVR1VnBSWE1kNzhzSExBYWpFRE80c2M3Ly9QT3lm",
    "V2p2SlBzSEZhYXdqRC0tQUFFQ0F3UUZCZ2NJQ1FvTERBME9Edz09",
    "--c7d40244c2943cbbbfc48f85dd10c598098d0472",
);

const PADDED_HEX: &str = concat!(
    "7b2273657373696f6e5f6964223a22616263222c225f637372665f746f6b656e",
    "223a2278797a3d3d227d060606060606",
);

#[test]
fn fixed_cookie_decrypts_byte_for_byte() {
    let plaintext = decrypt_signed_cookie(
        COOKIE,
        b"s3cr3t",
        b"encrypted cookie",
        b"signed encrypted cookie",
    )
    .unwrap();

    assert_eq!(plaintext.len(), 48);
    assert_eq!(
        data_encoding::HEXLOWER.encode(plaintext.expose()),
        PADDED_HEX
    );
    assert_eq!(
        plaintext.unpadded().unwrap(),
        br#"{"session_id":"abc","_csrf_token":"xyz=="}"#
    );
}

#[test]
fn fixed_cookie_rejects_other_secret() {
    let result = decrypt_signed_cookie(
        COOKIE,
        b"s3cr3u",
        b"encrypted cookie",
        b"signed encrypted cookie",
    );
    assert_eq!(result.unwrap_err(), CookieError::SignatureMismatch);
}
