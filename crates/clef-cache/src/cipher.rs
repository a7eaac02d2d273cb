//! AES-256-CBC blob cipher for the settings cache.
//!
//! Wire format: `IV (16 bytes) || ciphertext`, PKCS-7 padded. The format
//! carries no integrity tag, so decryption under a wrong key surfaces either
//! as a padding failure here or as unparseable plaintext downstream, and a
//! tampered blob can decrypt without complaint. Callers must treat cached
//! settings as a convenience, never as trusted input.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use clef_crypto_core::{EncryptionKey, SecretBuffer};

use crate::error::CacheError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// CBC initialization vector length in bytes, prepended to every blob.
pub const IV_LEN: usize = 16;

/// AES block length in bytes.
const BLOCK_LEN: usize = 16;

/// Shortest well-formed blob: the IV plus one padded block.
const MIN_BLOB_LEN: usize = IV_LEN + BLOCK_LEN;

// ---------------------------------------------------------------------------
// Encryption
// ---------------------------------------------------------------------------

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// Returns the full blob, `IV || ciphertext`.
///
/// # Errors
///
/// Returns [`CacheError::Encryption`] if the system RNG fails to produce
/// an IV.
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> Result<Vec<u8>, CacheError> {
    let mut iv = [0u8; IV_LEN];
    SystemRandom::new()
        .fill(&mut iv)
        .map_err(|_| CacheError::Encryption("IV generation failed".into()))?;
    Ok(encrypt_with_iv(key, &iv, plaintext))
}

/// Deterministic core of [`encrypt`], split out so known-answer tests can
/// pin exact ciphertext bytes.
fn encrypt_with_iv(key: &EncryptionKey, iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    let ciphertext = Aes256CbcEnc::new(key.expose().into(), iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = Vec::with_capacity(IV_LEN.saturating_add(ciphertext.len()));
    blob.extend_from_slice(iv);
    blob.extend_from_slice(&ciphertext);
    blob
}

// ---------------------------------------------------------------------------
// Decryption
// ---------------------------------------------------------------------------

/// Decrypt a blob produced by [`encrypt`].
///
/// The plaintext comes back in a [`SecretBuffer`] and is wiped when the
/// buffer drops.
///
/// # Errors
///
/// Returns [`CacheError::Corrupt`] if the blob is too short or not a whole
/// number of blocks, and [`CacheError::Decryption`] if the padding check
/// fails. A wrong key is only caught when it happens to break the padding;
/// the format has no stronger check.
pub fn decrypt(key: &EncryptionKey, blob: &[u8]) -> Result<SecretBuffer, CacheError> {
    if blob.len() < MIN_BLOB_LEN {
        return Err(CacheError::Corrupt(format!(
            "blob too short: {} bytes (minimum {MIN_BLOB_LEN})",
            blob.len()
        )));
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&blob[..IV_LEN]);
    let ciphertext = &blob[IV_LEN..];

    // BLOCK_LEN is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let ragged = ciphertext.len() % BLOCK_LEN != 0;
    if ragged {
        return Err(CacheError::Corrupt(format!(
            "ciphertext length {} is not a whole number of blocks",
            ciphertext.len()
        )));
    }

    let mut plaintext = Aes256CbcDec::new(key.expose().into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CacheError::Decryption)?;

    let result = SecretBuffer::new(&plaintext);
    plaintext.zeroize();
    Ok(result?)
}
