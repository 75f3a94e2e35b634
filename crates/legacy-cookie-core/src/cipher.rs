//! AES-256-CBC decryption of an already-authenticated cookie payload.
//!
//! CBC gives confidentiality only. Integrity comes from the HMAC over the
//! cipher segment, which must be verified before anything here runs.

use std::fmt;

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::encoding::decode_base64;
use crate::error::CookieError;
use crate::kdf::KEY_LEN;
use crate::memory::SecretBuffer;

/// AES block size, and therefore the IV length, in bytes.
pub const BLOCK_LEN: usize = 16;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

// ---------------------------------------------------------------------------
// Plaintext
// ---------------------------------------------------------------------------

/// Decrypted cookie bytes, padding included; zeroized on drop.
pub struct Plaintext(SecretBuffer);

impl Plaintext {
    /// The raw decrypted bytes, exactly as long as the ciphertext.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.0.expose()
    }

    /// Number of decrypted bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was decrypted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The decrypted bytes with PKCS#7 padding removed.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::InvalidPadding` if the trailing bytes are not a
    /// valid PKCS#7 pad of 1 to 16 bytes.
    pub fn unpadded(&self) -> Result<&[u8], CookieError> {
        strip_pkcs7(self.expose())
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Plaintext(***)")
    }
}

fn strip_pkcs7(data: &[u8]) -> Result<&[u8], CookieError> {
    let pad = usize::from(*data.last().ok_or(CookieError::InvalidPadding)?);
    if pad == 0 || pad > BLOCK_LEN {
        return Err(CookieError::InvalidPadding);
    }
    let body_len = data
        .len()
        .checked_sub(pad)
        .ok_or(CookieError::InvalidPadding)?;
    let (body, padding) = data.split_at(body_len);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(CookieError::InvalidPadding);
    }
    Ok(body)
}

// ---------------------------------------------------------------------------
// Decryption
// ---------------------------------------------------------------------------

/// Decode and decrypt a base64 ciphertext with a base64 IV.
///
/// Only the first 32 bytes of `encryption_key` are used.
///
/// # Errors
///
/// - `CookieError::InvalidBase64` if either input is not standard base64
/// - `CookieError::KeyTooShort` if the key has fewer than 32 bytes
/// - `CookieError::InvalidIvLength` if the IV is not 16 bytes
/// - `CookieError::InvalidCiphertextLength` if the ciphertext is not block-aligned
pub fn decrypt(
    ciphertext_b64: &[u8],
    iv_b64: &[u8],
    encryption_key: &[u8],
) -> Result<Plaintext, CookieError> {
    let ciphertext = decode_base64(ciphertext_b64, "ciphertext")?;
    let iv = decode_base64(iv_b64, "iv")?;
    decrypt_blocks(ciphertext, &iv, encryption_key)
}

/// Decrypt raw ciphertext in place, keeping any padding.
///
/// # Errors
///
/// Same structural errors as [`decrypt`], minus base64.
pub fn decrypt_blocks(
    mut ciphertext: Vec<u8>,
    iv: &[u8],
    encryption_key: &[u8],
) -> Result<Plaintext, CookieError> {
    let key = encryption_key
        .get(..KEY_LEN)
        .ok_or(CookieError::KeyTooShort {
            len: encryption_key.len(),
            min: KEY_LEN,
        })?;

    if iv.len() != BLOCK_LEN {
        return Err(CookieError::InvalidIvLength {
            len: iv.len(),
            expected: BLOCK_LEN,
        });
    }

    let misaligned = CookieError::InvalidCiphertextLength {
        len: ciphertext.len(),
        block: BLOCK_LEN,
    };
    if ciphertext.len().checked_rem(BLOCK_LEN) != Some(0) {
        return Err(misaligned);
    }

    let decryptor = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        CookieError::InvalidIvLength {
            len: iv.len(),
            expected: BLOCK_LEN,
        }
    })?;
    decryptor
        .decrypt_padded_mut::<NoPadding>(&mut ciphertext)
        .map_err(|_| misaligned)?;

    Ok(Plaintext(SecretBuffer::from_vec(ciphertext)))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
