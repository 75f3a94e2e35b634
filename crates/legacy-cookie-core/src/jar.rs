//! Authenticate-then-decrypt pipeline for signed, encrypted cookies.
//!
//! Stages run strictly in order and the first failure aborts the call:
//!
//! 1. percent-decode the raw value
//! 2. split `cipher_segment--signature`
//! 3. derive the signing key and verify the HMAC over `cipher_segment`
//! 4. base64-decode `cipher_segment` and split `ciphertext--iv`
//! 5. derive the encryption key and AES-256-CBC decrypt
//!
//! Nothing after step 3 runs unless the signature matched.

use crate::cipher::{self, Plaintext};
use crate::config::CookieConfig;
use crate::encoding::{decode_base64, percent_decode};
use crate::envelope::{CipherPayload, CookieEnvelope};
use crate::error::{CookieError, InvalidSession};
use crate::{kdf, signature};

/// Verify and decrypt a raw, percent-encoded cookie value.
///
/// Returns the decrypted bytes with block padding still attached.
///
/// # Errors
///
/// Returns the [`CookieError`] of the first stage that failed. Map it to
/// [`InvalidSession`] before it reaches a client.
pub fn decrypt_signed_cookie(
    raw_cookie: &str,
    base_secret: &[u8],
    encryption_salt: &[u8],
    signing_salt: &[u8],
) -> Result<Plaintext, CookieError> {
    let result = run(raw_cookie, base_secret, encryption_salt, signing_salt);
    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        if err.is_security_event() {
            tracing::warn!(kind = err.kind(), "signed cookie failed authentication");
        } else {
            tracing::debug!(kind = err.kind(), "signed cookie rejected");
        }
    }
    result
}

fn run(
    raw_cookie: &str,
    base_secret: &[u8],
    encryption_salt: &[u8],
    signing_salt: &[u8],
) -> Result<Plaintext, CookieError> {
    let cookie = percent_decode(raw_cookie)?;
    let envelope = CookieEnvelope::parse(&cookie)?;

    let signing_key = kdf::derive(base_secret, signing_salt);
    signature::verify(
        envelope.cipher_segment,
        envelope.signature,
        signing_key.expose(),
    )?;

    let segment = decode_base64(envelope.cipher_segment, "cipher segment")?;
    let payload = CipherPayload::parse(&segment)?;

    let encryption_key = kdf::derive(base_secret, encryption_salt);
    cipher::decrypt(
        payload.ciphertext_b64,
        payload.iv_b64,
        encryption_key.expose(),
    )
}

/// Cookie decryption bound to one application's secrets.
#[derive(Debug)]
pub struct CookieDecryptor {
    config: CookieConfig,
}

impl CookieDecryptor {
    /// Bind a decryptor to `config`.
    #[must_use]
    pub const fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    /// The bound configuration.
    #[must_use]
    pub const fn config(&self) -> &CookieConfig {
        &self.config
    }

    /// Verify and decrypt `raw_cookie`, reporting which stage failed.
    ///
    /// # Errors
    ///
    /// `CookieError::CookieTooLarge` if the raw value exceeds the configured
    /// limit, otherwise any error of [`decrypt_signed_cookie`].
    pub fn decrypt(&self, raw_cookie: &str) -> Result<Plaintext, CookieError> {
        let limit = self.config.max_cookie_len();
        if raw_cookie.len() > limit {
            return Err(CookieError::CookieTooLarge {
                len: raw_cookie.len(),
                limit,
            });
        }
        decrypt_signed_cookie(
            raw_cookie,
            self.config.secret_key_base().as_bytes(),
            self.config.encrypted_cookie_salt().as_bytes(),
            self.config.encrypted_signed_cookie_salt().as_bytes(),
        )
    }

    /// Like [`Self::decrypt`], but every failure is the same opaque value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSession`] for any rejected cookie.
    pub fn open_session(&self, raw_cookie: &str) -> Result<Plaintext, InvalidSession> {
        Ok(self.decrypt(raw_cookie)?)
    }
}
