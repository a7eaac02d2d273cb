//! `clef-cache` — Encrypted per-site settings cache for CLEF.
//!
//! CLEF derives every password on demand and stores none of them. What a
//! front-end still wants to remember is which settings were last used per
//! site (user identity, counter, password class) so its fields can be
//! pre-filled. This crate persists that map as a single AES-256-CBC blob
//! per master secret, named by the secret's fingerprint. The master secret
//! and the keys derived from it never touch disk.
//!
//! The on-disk format is carried over from earlier front-ends and has no
//! integrity protection; see [`cipher`] for the consequences.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod cipher;
pub mod entries;
pub mod store;

pub use cipher::{decrypt, encrypt, IV_LEN};
pub use entries::{CacheEntries, CacheEntry};
pub use error::CacheError;
pub use store::CacheStore;
