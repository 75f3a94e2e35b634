//! HMAC-SHA1 verification of the cookie's cipher segment.
//!
//! Uses `ring::hmac` (`HMAC_SHA1_FOR_LEGACY_USE_ONLY`); SHA-1 is fixed by the
//! issuer's format.

use ring::hmac;

use crate::encoding::decode_hex_tag;
use crate::error::CookieError;

/// HMAC-SHA1 tag length in bytes.
pub const TAG_LEN: usize = 20;

/// Verify `tag_hex` against HMAC-SHA1(`signing_key`, `cipher_segment`).
///
/// The MAC is computed over the raw bytes of the still-base64 cipher segment.
/// The comparison is constant-time over the full tag; a tag of the wrong
/// length fails the same way as a wrong tag.
///
/// # Errors
///
/// Returns `CookieError::InvalidTagEncoding` if `tag_hex` is not valid hex, or
/// `CookieError::SignatureMismatch` if the tag does not match.
pub fn verify(
    cipher_segment: &[u8],
    tag_hex: &[u8],
    signing_key: &[u8],
) -> Result<(), CookieError> {
    let tag = decode_hex_tag(tag_hex)?;
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key);
    hmac::verify(&key, cipher_segment, &tag)
        .map_err(|_| CookieError::SignatureMismatch)
}
