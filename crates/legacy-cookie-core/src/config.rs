//! Secrets and limits for cookie decryption.
//!
//! The base secret and both salts come from the application's deployment
//! configuration. This module only holds them; it never reads files or the
//! environment.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Issuer default salt for the encryption key.
pub const DEFAULT_ENCRYPTED_COOKIE_SALT: &str = "encrypted cookie";

/// Issuer default salt for the signing key.
pub const DEFAULT_ENCRYPTED_SIGNED_COOKIE_SALT: &str = "signed encrypted cookie";

/// Largest raw cookie accepted by default (browser per-cookie ceiling).
pub const DEFAULT_MAX_COOKIE_LEN: usize = 4096;

/// Base secret, salts and size limit for [`crate::CookieDecryptor`].
///
/// Deserializable from any `serde` format; secrets are masked in `Debug`.
///
/// ```json
/// { "secretKeyBase": "…", "encryptedCookieSalt": "encrypted cookie" }
/// ```
#[derive(Debug, Deserialize)]
#[serde(from = "RawCookieConfig")]
pub struct CookieConfig {
    secret_key_base: SecretString,
    encrypted_cookie_salt: SecretString,
    encrypted_signed_cookie_salt: SecretString,
    max_cookie_len: usize,
}

impl CookieConfig {
    /// Config with the issuer's default salts and size limit.
    #[must_use]
    pub fn new(secret_key_base: impl Into<String>) -> Self {
        Self::with_salts(
            secret_key_base,
            DEFAULT_ENCRYPTED_COOKIE_SALT,
            DEFAULT_ENCRYPTED_SIGNED_COOKIE_SALT,
        )
    }

    /// Config with application-specific salts.
    #[must_use]
    pub fn with_salts(
        secret_key_base: impl Into<String>,
        encrypted_cookie_salt: impl Into<String>,
        encrypted_signed_cookie_salt: impl Into<String>,
    ) -> Self {
        Self {
            secret_key_base: SecretString::from(secret_key_base.into()),
            encrypted_cookie_salt: SecretString::from(encrypted_cookie_salt.into()),
            encrypted_signed_cookie_salt: SecretString::from(encrypted_signed_cookie_salt.into()),
            max_cookie_len: DEFAULT_MAX_COOKIE_LEN,
        }
    }

    /// Override the raw cookie size limit.
    #[must_use]
    pub fn with_max_cookie_len(mut self, max_cookie_len: usize) -> Self {
        self.max_cookie_len = max_cookie_len;
        self
    }

    /// Shared application secret.
    #[must_use]
    pub fn secret_key_base(&self) -> &str {
        self.secret_key_base.expose_secret()
    }

    /// Salt for the AES key.
    #[must_use]
    pub fn encrypted_cookie_salt(&self) -> &str {
        self.encrypted_cookie_salt.expose_secret()
    }

    /// Salt for the HMAC key.
    #[must_use]
    pub fn encrypted_signed_cookie_salt(&self) -> &str {
        self.encrypted_signed_cookie_salt.expose_secret()
    }

    /// Raw cookie size limit in bytes.
    #[must_use]
    pub const fn max_cookie_len(&self) -> usize {
        self.max_cookie_len
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCookieConfig {
    secret_key_base: String,
    #[serde(default = "default_encrypted_cookie_salt")]
    encrypted_cookie_salt: String,
    #[serde(default = "default_encrypted_signed_cookie_salt")]
    encrypted_signed_cookie_salt: String,
    #[serde(default = "default_max_cookie_len")]
    max_cookie_len: usize,
}

impl From<RawCookieConfig> for CookieConfig {
    fn from(raw: RawCookieConfig) -> Self {
        Self::with_salts(
            raw.secret_key_base,
            raw.encrypted_cookie_salt,
            raw.encrypted_signed_cookie_salt,
        )
        .with_max_cookie_len(raw.max_cookie_len)
    }
}

fn default_encrypted_cookie_salt() -> String {
    DEFAULT_ENCRYPTED_COOKIE_SALT.into()
}
fn default_encrypted_signed_cookie_salt() -> String {
    DEFAULT_ENCRYPTED_SIGNED_COOKIE_SALT.into()
}
const fn default_max_cookie_len() -> usize {
    DEFAULT_MAX_COOKIE_LEN
}
