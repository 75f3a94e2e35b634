//! PBKDF2-HMAC-SHA1 key derivation with the legacy issuer's parameters.
//!
//! The signing key and the encryption key are derived from the same
//! `secret_key_base` with different salts. The parameters below are the
//! issuer's defaults and must not change, or every existing cookie stops
//! verifying.

use std::num::NonZeroU32;

use ring::pbkdf2;
use zeroize::Zeroize;

use crate::memory::SecretBytes;

/// Derived key length in bytes.
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 1000;

/// A 32-byte key derived from the base secret; zeroized on drop.
pub type DerivedKey = SecretBytes<KEY_LEN>;

/// [`ITERATIONS`] as the type `ring` expects.
const ROUNDS: NonZeroU32 = match NonZeroU32::new(ITERATIONS) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

/// Derive a 32-byte key from `base_secret` and `salt`.
///
/// Deterministic and infallible for any byte inputs, including empty ones.
#[must_use]
pub fn derive(base_secret: &[u8], salt: &[u8]) -> DerivedKey {
    derive_with(base_secret, salt, ROUNDS)
}

fn derive_with(base_secret: &[u8], salt: &[u8], rounds: NonZeroU32) -> DerivedKey {
    let mut output = [0u8; KEY_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA1,
        rounds,
        salt,
        base_secret,
        &mut output,
    );
    let key = SecretBytes::new(output);
    output.zeroize();
    key
}
