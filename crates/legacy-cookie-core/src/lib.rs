//! `legacy-cookie-core`: verification and decryption of legacy
//! signed-and-encrypted session cookies.
//!
//! Wire format, after percent-decoding:
//!
//! ```text
//! base64( base64(ciphertext) "--" base64(iv) ) "--" hex( HMAC-SHA1(signing_key, segment) )
//! ```
//!
//! Keys come from PBKDF2-HMAC-SHA1 (1000 rounds, 32 bytes) over the
//! application's `secret_key_base` with separate signing and encryption
//! salts; the payload is AES-256-CBC.
//!
//! This crate is the audit target: zero network, zero async, no global state.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod encoding;
pub mod envelope;

pub mod kdf;
pub mod signature;

pub mod cipher;

pub mod config;
pub mod jar;

pub use cipher::{decrypt, Plaintext, BLOCK_LEN};
pub use config::{
    CookieConfig, DEFAULT_ENCRYPTED_COOKIE_SALT, DEFAULT_ENCRYPTED_SIGNED_COOKIE_SALT,
    DEFAULT_MAX_COOKIE_LEN,
};
pub use encoding::percent_decode;
pub use envelope::{split_pair, CipherPayload, CookieEnvelope, DELIMITER};
pub use error::{CookieError, InvalidSession};
pub use jar::{decrypt_signed_cookie, CookieDecryptor};
pub use kdf::{derive, DerivedKey, ITERATIONS, KEY_LEN};
pub use memory::{SecretBuffer, SecretBytes};
pub use signature::{verify, TAG_LEN};
