//! Error types for `legacy-cookie-core`.
//!
//! Every variant is terminal: malformed or tampered cookies are never
//! transient, so callers should not retry. Messages carry lengths and static
//! descriptions only, never cookie bytes, keys or plaintext.

use thiserror::Error;

/// Errors produced while verifying and decrypting a signed cookie.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookieError {
    /// Percent-decoding of the raw cookie failed (bad or truncated `%XX` escape).
    #[error("malformed percent-encoding at byte offset {offset}")]
    MalformedEncoding {
        /// Offset of the offending `%` in the raw cookie.
        offset: usize,
    },

    /// Missing `--` delimiter or an empty segment at the outer or inner split.
    #[error("malformed cookie: {0}")]
    MalformedCookie(&'static str),

    /// The signature is not valid hexadecimal.
    #[error("signature is not valid hex ({len} characters)")]
    InvalidTagEncoding {
        /// Length of the supplied signature string.
        len: usize,
    },

    /// The HMAC tag does not match. The cookie was tampered with or signed
    /// under a different secret.
    #[error("cookie signature mismatch")]
    SignatureMismatch,

    /// The cipher segment, ciphertext or IV is not valid standard base64.
    #[error("invalid base64 in {0}")]
    InvalidBase64(&'static str),

    /// The encryption key is shorter than an AES-256 key.
    #[error("encryption key too short: {len} bytes (need {min})")]
    KeyTooShort {
        /// Supplied key length.
        len: usize,
        /// Required minimum.
        min: usize,
    },

    /// The decoded IV is not exactly one cipher block.
    #[error("invalid IV length: {len} bytes (expected {expected})")]
    InvalidIvLength {
        /// Decoded IV length.
        len: usize,
        /// Cipher block size.
        expected: usize,
    },

    /// The decoded ciphertext is not a whole number of cipher blocks.
    #[error("ciphertext length {len} is not a multiple of {block}")]
    InvalidCiphertextLength {
        /// Decoded ciphertext length.
        len: usize,
        /// Cipher block size.
        block: usize,
    },

    /// PKCS#7 padding on the recovered plaintext is malformed.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// The raw cookie exceeds the configured size ceiling.
    #[error("cookie too large: {len} bytes (limit {limit})")]
    CookieTooLarge {
        /// Raw cookie length.
        len: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl CookieError {
    /// Static, secret-free label for this error, suitable for a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedEncoding { .. } => "malformed_encoding",
            Self::MalformedCookie(_) => "malformed_cookie",
            Self::InvalidTagEncoding { .. } => "invalid_tag_encoding",
            Self::SignatureMismatch => "signature_mismatch",
            Self::InvalidBase64(_) => "invalid_base64",
            Self::KeyTooShort { .. } => "key_too_short",
            Self::InvalidIvLength { .. } => "invalid_iv_length",
            Self::InvalidCiphertextLength { .. } => "invalid_ciphertext_length",
            Self::InvalidPadding => "invalid_padding",
            Self::CookieTooLarge { .. } => "cookie_too_large",
        }
    }

    /// Returns `true` for authentication failures, as opposed to parse errors.
    #[must_use]
    pub const fn is_security_event(&self) -> bool {
        matches!(self, Self::SignatureMismatch)
    }
}

/// The session cookie is not valid.
///
/// Every [`CookieError`] collapses into this one value so the transport layer
/// cannot be used as an oracle to tell signature failures from formatting
/// failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid session")]
pub struct InvalidSession;

impl From<CookieError> for InvalidSession {
    fn from(_: CookieError) -> Self {
        Self
    }
}
