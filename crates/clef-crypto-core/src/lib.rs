//! `clef-crypto-core` — Deterministic password derivation engine for CLEF.
//!
//! This crate is the audit target: zero I/O, zero persistence, zero
//! randomness. Every public operation is a pure function of its inputs —
//! passwords are re-derived on demand, never stored.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod kdf;
pub mod seed;
pub mod templates;

pub mod calculate;

pub use calculate::{calculate, calculate_or_empty, derive_login_name, derive_security_answer};
pub use error::CryptoError;
pub use kdf::{
    encryption_key, fingerprint, master_key, EncryptionKey, Fingerprint, KeyScope, MasterKey,
    ENCRYPTION_KEY_LEN, MASTER_KEY_LEN,
};
pub use memory::{disable_core_dumps, LockedRegion, SecretBuffer, SecretBytes};
pub use seed::{site_seed, SiteSeed, SEED_LEN};
pub use templates::{
    alphabet, fill_template, login_name_templates, password_templates, security_answer_templates,
    PasswordClass, MAX_TEMPLATE_LEN,
};
