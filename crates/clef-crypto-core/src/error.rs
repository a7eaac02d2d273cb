//! Cryptographic error types for `clef-crypto-core`.

use thiserror::Error;

/// Errors produced by derivation operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A required input string was empty. The payload names the input
    /// (`"master secret"`, `"user identity"`, `"site name"`).
    #[error("empty input: {0} must not be empty")]
    EmptyInput(&'static str),

    /// An argument was outside its valid range (counter of zero,
    /// oversized input, unknown template symbol).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A template longer than the seed can index. The seed reserves one
    /// byte for template selection, leaving 31 bytes for characters.
    #[error("unsupported template length: {length} symbols (seed indexes at most 31)")]
    UnsupportedTemplateLength {
        /// Length of the offending template in symbols.
        length: usize,
    },

    /// Key derivation failed (scrypt parameter validation, output sizing).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Secure memory allocation failure (mlock, core-dump limits).
    #[error("secure memory error: {0}")]
    SecureMemory(String),
}
