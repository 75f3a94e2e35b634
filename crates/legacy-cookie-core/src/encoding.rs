//! Text encodings found on the cookie wire: percent-escaping, base64 and hex.

use crate::error::CookieError;

/// Reverse the percent-encoding applied to a cookie value in transit.
///
/// `%XX` escapes (either hex case) become the byte they name and `+` becomes
/// a space, as in query-string unescaping. Issuers escape a literal `+` in
/// base64 output as `%2B`.
///
/// # Errors
///
/// Returns `CookieError::MalformedEncoding` if a `%` is not followed by two
/// hex digits.
pub fn percent_decode(raw: &str) -> Result<Vec<u8>, CookieError> {
    let bytes = raw.as_bytes();
    if let Some(offset) = first_invalid_escape(bytes) {
        return Err(CookieError::MalformedEncoding { offset });
    }

    let spaced: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    Ok(percent_encoding::percent_decode(&spaced).collect())
}

/// Offset of the first `%` that does not start a complete `%XX` escape.
fn first_invalid_escape(bytes: &[u8]) -> Option<usize> {
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'%')
        .map(|(i, _)| i)
        .find(|&i| {
            let Some([hi, lo]) = bytes.get(i.saturating_add(1)..i.saturating_add(3)) else {
                return true;
            };
            !(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
        })
}

/// Decode standard, padded base64. `field` names the input in the error.
///
/// # Errors
///
/// Returns `CookieError::InvalidBase64` on any decoding failure.
pub fn decode_base64(input: &[u8], field: &'static str) -> Result<Vec<u8>, CookieError> {
    data_encoding::BASE64
        .decode(input)
        .map_err(|_| CookieError::InvalidBase64(field))
}

/// Decode a hex-encoded authentication tag (either case).
///
/// # Errors
///
/// Returns `CookieError::InvalidTagEncoding` on odd length or a non-hex digit.
pub fn decode_hex_tag(input: &[u8]) -> Result<Vec<u8>, CookieError> {
    data_encoding::HEXLOWER_PERMISSIVE
        .decode(input)
        .map_err(|_| CookieError::InvalidTagEncoding { len: input.len() })
}
