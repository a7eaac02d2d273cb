//! Memory-hard key derivation from the master secret.
//!
//! This module provides:
//! - [`master_key`] — derive the 64-byte site master key from (master secret, user identity)
//! - [`encryption_key`] — derive the 32-byte settings-cache key from the master secret alone
//! - [`fingerprint`] — derive the non-secret identifier that names a secret's cache file
//! - [`KeyScope`] — domain-separation scope for per-site derivation
//!
//! All three derivations run scrypt at one fixed, deliberately expensive
//! parameter set. The parameters are part of the output contract: two
//! implementations agree on generated passwords only if they agree on
//! N, r, p and the salt layout, so nothing here is configurable.

use crate::error::CryptoError;
use crate::memory::SecretBytes;
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::Zeroize;

/// Fixed domain-separation namespace, shared with every compatible
/// implementation of this derivation scheme.
const NAMESPACE: &[u8] = b"com.lyndir.masterpassword";

/// scrypt CPU/memory cost, as log₂(N). N = 32768.
const SCRYPT_LOG_N: u8 = 15;

/// scrypt block size.
const SCRYPT_R: u32 = 8;

/// scrypt parallelization.
const SCRYPT_P: u32 = 2;

/// Length of the site master key in bytes.
pub const MASTER_KEY_LEN: usize = 64;

/// Length of the settings-cache encryption key in bytes.
pub const ENCRYPTION_KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// 64-byte site master key derived per (master secret, user identity).
///
/// Only ever used as the HMAC key for per-site seed derivation. Never
/// persisted, never reused across user identities.
pub type MasterKey = SecretBytes<MASTER_KEY_LEN>;

/// 32-byte symmetric key for the settings cache, derived from the master
/// secret alone.
pub type EncryptionKey = SecretBytes<ENCRYPTION_KEY_LEN>;

/// What a per-site derivation is for.
///
/// The scope string leads the seed message and keeps passwords, login
/// names, and security answers for the same site cryptographically
/// independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyScope {
    /// A password used to authenticate to the site (the default purpose).
    Authentication,
    /// A login name for the site.
    Identification,
    /// An answer to a security question.
    Recovery,
}

impl KeyScope {
    /// The exact scope bytes prefixed to the seed message.
    #[must_use]
    pub const fn scope(self) -> &'static [u8] {
        match self {
            Self::Authentication => b"com.lyndir.masterpassword",
            Self::Identification => b"com.lyndir.masterpassword.login",
            Self::Recovery => b"com.lyndir.masterpassword.answer",
        }
    }
}

/// Stable, non-reversible identifier for a master secret.
///
/// Names the on-disk settings-cache file for that secret. Deriving it
/// costs a full scrypt pass, so it does not meaningfully speed up
/// offline guessing, and it never decrypts anything itself. Unlike key
/// material it is not secret-managed: it is written into a file name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// The raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, used as the cache file stem.
    #[must_use]
    pub fn to_hex(&self) -> String {
        data_encoding::HEXLOWER.encode(&self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Core derivations
// ---------------------------------------------------------------------------

/// Derive the 64-byte site master key from a master secret and the name
/// of the person it belongs to.
///
/// salt = `NAMESPACE ‖ len(user_identity) as u32 big-endian ‖ user_identity`.
/// The identity is baked into the salt so two people sharing a master
/// secret still derive unrelated keys.
///
/// Identical inputs reproduce the key bit-for-bit; this is what makes
/// generated passwords recoverable without storing anything.
///
/// # Errors
///
/// Returns `CryptoError::EmptyInput` if the master secret or the user
/// identity is empty, `CryptoError::InvalidArgument` if the identity
/// exceeds `u32::MAX` bytes, and `CryptoError::KeyDerivation` if scrypt
/// itself fails.
pub fn master_key(master_secret: &str, user_identity: &str) -> Result<MasterKey, CryptoError> {
    if master_secret.is_empty() {
        return Err(CryptoError::EmptyInput("master secret"));
    }
    if user_identity.is_empty() {
        return Err(CryptoError::EmptyInput("user identity"));
    }

    let mut salt = identity_salt(user_identity)?;
    let mut output = [0u8; MASTER_KEY_LEN];
    let derived = derive_scrypt(master_secret.as_bytes(), &salt, &mut output);
    salt.zeroize();
    derived?;

    let key = SecretBytes::new(output);
    output.zeroize();
    Ok(key)
}

/// Derive the 32-byte settings-cache encryption key from the master
/// secret alone.
///
/// salt = `NAMESPACE` (bare bytes, no length prefix) — the cache is
/// per-secret, not per-identity, so the identity stays out of the salt.
///
/// # Errors
///
/// Returns `CryptoError::EmptyInput` for an empty master secret and
/// `CryptoError::KeyDerivation` if scrypt itself fails.
pub fn encryption_key(master_secret: &str) -> Result<EncryptionKey, CryptoError> {
    if master_secret.is_empty() {
        return Err(CryptoError::EmptyInput("master secret"));
    }

    let mut output = [0u8; ENCRYPTION_KEY_LEN];
    derive_scrypt(master_secret.as_bytes(), NAMESPACE, &mut output)?;

    let key = SecretBytes::new(output);
    output.zeroize();
    Ok(key)
}

/// Derive the fingerprint that names the settings-cache file for a
/// master secret.
///
/// SHA-256 over a separate 64-byte scrypt derivation (salt =
/// `NAMESPACE`, bare). The 64-byte width keeps this value distinct from
/// [`encryption_key`]: knowing the file name reveals nothing about the
/// key inside it.
///
/// # Errors
///
/// Returns `CryptoError::EmptyInput` for an empty master secret and
/// `CryptoError::KeyDerivation` if scrypt itself fails.
pub fn fingerprint(master_secret: &str) -> Result<Fingerprint, CryptoError> {
    if master_secret.is_empty() {
        return Err(CryptoError::EmptyInput("master secret"));
    }

    let mut wide = [0u8; MASTER_KEY_LEN];
    derive_scrypt(master_secret.as_bytes(), NAMESPACE, &mut wide)?;
    let digest = Sha256::digest(&wide);
    wide.zeroize();

    Ok(Fingerprint(digest.into()))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Run scrypt at the fixed cost into `output` (its length selects the
/// derived size — 64 for the master key, 32 for the encryption key).
fn derive_scrypt(secret: &[u8], salt: &[u8], output: &mut [u8]) -> Result<(), CryptoError> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, output.len())
        .map_err(|e| CryptoError::KeyDerivation(format!("invalid scrypt params: {e}")))?;

    scrypt::scrypt(secret, salt, &params, output)
        .map_err(|e| CryptoError::KeyDerivation(format!("scrypt derivation failed: {e}")))
}

/// Build the master-key salt: `NAMESPACE ‖ u32be(len) ‖ user_identity`.
///
/// The length prefix counts UTF-8 bytes, not characters.
fn identity_salt(user_identity: &str) -> Result<Vec<u8>, CryptoError> {
    let name = user_identity.as_bytes();
    let len = u32::try_from(name.len()).map_err(|_| {
        CryptoError::InvalidArgument(format!("user identity too long: {} bytes", name.len()))
    })?;

    let mut salt = Vec::new();
    salt.extend_from_slice(NAMESPACE);
    salt.extend_from_slice(&len.to_be_bytes());
    salt.extend_from_slice(name);
    Ok(salt)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
//
// Everything here stays off the scrypt path (validation, salt layout,
// scope strings) — full-cost derivation vectors live in tests/kat_vectors/.
