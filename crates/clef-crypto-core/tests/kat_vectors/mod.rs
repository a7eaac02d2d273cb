//! Shared fixtures: the canonical identity from the published vectors,
//! with each expensive scrypt derivation cached for the whole run.

mod passwords;
mod site_seed;

use std::sync::OnceLock;

use clef_crypto_core::{
    encryption_key, fingerprint, master_key, EncryptionKey, Fingerprint, MasterKey,
};

pub const SECRET: &str = "banana colored duckling";
pub const USER: &str = "Robert Lee Mitchell";
pub const SITE: &str = "masterpasswordapp.com";

pub fn canonical_master_key() -> &'static MasterKey {
    static KEY: OnceLock<MasterKey> = OnceLock::new();
    KEY.get_or_init(|| master_key(SECRET, USER).expect("master key derivation should succeed"))
}

pub fn canonical_encryption_key() -> &'static EncryptionKey {
    static KEY: OnceLock<EncryptionKey> = OnceLock::new();
    KEY.get_or_init(|| encryption_key(SECRET).expect("encryption key derivation should succeed"))
}

pub fn canonical_fingerprint() -> Fingerprint {
    static FP: OnceLock<Fingerprint> = OnceLock::new();
    *FP.get_or_init(|| fingerprint(SECRET).expect("fingerprint derivation should succeed"))
}
