//! Orchestration: master secret in, generated string out.
//!
//! Composes the pipeline — master key (scrypt), site seed (HMAC),
//! template fill — behind one call per derived thing: a password, a
//! login name, or a security answer. Stateless; every call derives from
//! scratch and zeroizes its intermediates on drop.

use crate::error::CryptoError;
use crate::kdf::{self, KeyScope};
use crate::seed;
use crate::templates::{self, PasswordClass};

/// Generate the password for a site.
///
/// Deterministic: the same five inputs always produce the same password,
/// which is why none of them — and no output — ever needs storing.
///
/// # Errors
///
/// Returns `CryptoError::EmptyInput` if the master secret, user
/// identity, or site name is empty; `CryptoError::InvalidArgument` for
/// counter 0; `CryptoError::KeyDerivation` if scrypt itself fails.
pub fn calculate(
    master_secret: &str,
    user_identity: &str,
    site_name: &str,
    counter: u32,
    class: PasswordClass,
) -> Result<String, CryptoError> {
    // Check the cheap arguments before paying for scrypt.
    validate_site_request(site_name, counter)?;

    let master_key = kdf::master_key(master_secret, user_identity)?;
    let seed = seed::site_seed(
        &master_key,
        KeyScope::Authentication,
        site_name,
        counter,
        None,
    )?;
    templates::fill_template(&seed, templates::password_templates(class))
}

/// [`calculate`], with every failure flattened to `""`.
///
/// Legacy front-ends treat an empty result as "nothing to show" instead
/// of surfacing an error. Opt-in compatibility shim; new callers should
/// use [`calculate`] and handle the `Result`.
#[must_use]
pub fn calculate_or_empty(
    master_secret: &str,
    user_identity: &str,
    site_name: &str,
    counter: u32,
    class: PasswordClass,
) -> String {
    calculate(master_secret, user_identity, site_name, counter, class).unwrap_or_default()
}

/// Generate the login name for a site.
///
/// Same pipeline as [`calculate`] under the identification scope, using
/// the all-lowercase name template. Not counter-free: the counter is
/// part of the seed, so it participates here exactly as for passwords.
///
/// # Errors
///
/// Same conditions as [`calculate`].
pub fn derive_login_name(
    master_secret: &str,
    user_identity: &str,
    site_name: &str,
    counter: u32,
) -> Result<String, CryptoError> {
    validate_site_request(site_name, counter)?;

    let master_key = kdf::master_key(master_secret, user_identity)?;
    let seed = seed::site_seed(
        &master_key,
        KeyScope::Identification,
        site_name,
        counter,
        None,
    )?;
    templates::fill_template(&seed, templates::login_name_templates())
}

/// Generate the answer to a site's security question.
///
/// Recovery scope, word-phrase templates. Pass the question text (or a
/// distinctive word from it) as `context` to derive a different answer
/// per question; `None` derives the site's general answer.
///
/// # Errors
///
/// Same conditions as [`calculate`].
pub fn derive_security_answer(
    master_secret: &str,
    user_identity: &str,
    site_name: &str,
    counter: u32,
    context: Option<&str>,
) -> Result<String, CryptoError> {
    validate_site_request(site_name, counter)?;

    let master_key = kdf::master_key(master_secret, user_identity)?;
    let seed = seed::site_seed(&master_key, KeyScope::Recovery, site_name, counter, context)?;
    templates::fill_template(&seed, templates::security_answer_templates())
}

/// Reject empty site names and counter 0 before any derivation work.
fn validate_site_request(site_name: &str, counter: u32) -> Result<(), CryptoError> {
    if site_name.is_empty() {
        return Err(CryptoError::EmptyInput("site name"));
    }
    if counter == 0 {
        return Err(CryptoError::InvalidArgument(
            "site counter must be at least 1".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
//
// Validation paths only — they fail before the scrypt stage runs.
// Full-derivation vectors live in tests/kat_vectors/.
