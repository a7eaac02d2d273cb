//! Error types for the settings cache.

use clef_crypto_core::CryptoError;
use thiserror::Error;

/// Errors produced by settings-cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Key derivation failed in the crypto core.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// No cache blob exists for this master secret.
    #[error("no settings cache for this master secret")]
    NotFound,

    /// Encryption-side failure, currently only IV generation.
    #[error("cache encryption failed: {0}")]
    Encryption(String),

    /// The blob did not decrypt under the derived key. The format has no
    /// integrity tag, so a wrong master secret and a damaged file are
    /// indistinguishable here.
    #[error("cache blob did not decrypt: wrong master secret or damaged file")]
    Decryption,

    /// The blob is structurally invalid, or decrypted to something that
    /// is not a settings map.
    #[error("cache blob is corrupt: {0}")]
    Corrupt(String),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
