//! HMAC-stage vector: the per-site seed under the canonical master key.

use data_encoding::HEXLOWER;

use clef_crypto_core::{site_seed, KeyScope};

use super::{canonical_master_key, SITE};

#[test]
fn authentication_seed_vector() {
    let seed = site_seed(canonical_master_key(), KeyScope::Authentication, SITE, 1, None)
        .expect("seed derivation should succeed");
    assert_eq!(
        HEXLOWER.encode(seed.expose()),
        "121b9cd8cacd368be235408c3f23f26918f9a21e871e0032658dd51bd49678d2"
    );
}

#[test]
fn scopes_separate_cleanly() {
    let key = canonical_master_key();
    let auth = site_seed(key, KeyScope::Authentication, SITE, 1, None).expect("auth seed");
    let ident = site_seed(key, KeyScope::Identification, SITE, 1, None).expect("ident seed");
    let recov = site_seed(key, KeyScope::Recovery, SITE, 1, None).expect("recovery seed");
    assert_ne!(auth.expose(), ident.expose());
    assert_ne!(auth.expose(), recov.expose());
    assert_ne!(ident.expose(), recov.expose());
}

#[test]
fn counter_separates_cleanly() {
    let key = canonical_master_key();
    let c1 = site_seed(key, KeyScope::Authentication, SITE, 1, None).expect("counter 1 seed");
    let c2 = site_seed(key, KeyScope::Authentication, SITE, 2, None).expect("counter 2 seed");
    assert_ne!(c1.expose(), c2.expose());
}
