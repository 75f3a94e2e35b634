//! Two-part cookie structures separated by a literal `--`.
//!
//! The outer layer is `cipher_segment--signature_hex`; the base64-decoded
//! cipher segment is in turn `ciphertext_b64--iv_b64`. Both splits use the
//! FIRST occurrence of the delimiter only.

use crate::error::CookieError;

/// Delimiter between the two halves of every cookie layer.
pub const DELIMITER: &[u8] = b"--";

/// Split `input` on the first occurrence of `delimiter`.
///
/// # Errors
///
/// Returns `CookieError::MalformedCookie` if the delimiter is absent or either
/// side is empty.
pub fn split_pair<'a>(
    input: &'a [u8],
    delimiter: &[u8],
) -> Result<(&'a [u8], &'a [u8]), CookieError> {
    if delimiter.is_empty() {
        return Err(CookieError::MalformedCookie("empty delimiter"));
    }
    let at = input
        .windows(delimiter.len())
        .position(|w| w == delimiter)
        .ok_or(CookieError::MalformedCookie("missing delimiter"))?;

    let (head, rest) = input.split_at(at);
    let tail = rest.get(delimiter.len()..).unwrap_or_default();

    if head.is_empty() || tail.is_empty() {
        return Err(CookieError::MalformedCookie("empty segment"));
    }
    Ok((head, tail))
}

/// Outer layer: the signed cipher segment and its hex HMAC tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieEnvelope<'a> {
    /// Base64 text the signature is computed over.
    pub cipher_segment: &'a [u8],
    /// Hex-encoded HMAC-SHA1 tag.
    pub signature: &'a [u8],
}

impl<'a> CookieEnvelope<'a> {
    /// Parse a percent-decoded cookie value.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::MalformedCookie` on a missing delimiter or empty half.
    pub fn parse(cookie: &'a [u8]) -> Result<Self, CookieError> {
        let (cipher_segment, signature) = split_pair(cookie, DELIMITER)?;
        Ok(Self {
            cipher_segment,
            signature,
        })
    }
}

/// Inner layer: base64 ciphertext and base64 IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherPayload<'a> {
    /// Standard base64 of the AES-CBC ciphertext.
    pub ciphertext_b64: &'a [u8],
    /// Standard base64 of the 16-byte IV.
    pub iv_b64: &'a [u8],
}

impl<'a> CipherPayload<'a> {
    /// Parse the base64-decoded cipher segment.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::MalformedCookie` on a missing delimiter or empty half.
    pub fn parse(decoded_segment: &'a [u8]) -> Result<Self, CookieError> {
        let (ciphertext_b64, iv_b64) = split_pair(decoded_segment, DELIMITER)?;
        Ok(Self {
            ciphertext_b64,
            iv_b64,
        })
    }
}
