//! Per-site seed derivation via keyed hashing.
//!
//! The 32-byte site seed is the bridge between the master key and one
//! generated password: HMAC-SHA256 (`ring::hmac`) over a message naming
//! the derivation scope, the site, and the counter. Everything
//! downstream — template choice, character choice — reads from this
//! seed, so it fully determines the output.

use ring::hmac;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::kdf::{KeyScope, MasterKey};
use crate::memory::SecretBytes;

// ── Constants ───────────────────────────────────────────────────────

/// Length of a site seed in bytes (HMAC-SHA256 output).
pub const SEED_LEN: usize = 32;

// ── Types ───────────────────────────────────────────────────────────

/// 32-byte per-site seed. Zeroized on drop; consumed by the template
/// engine and never persisted.
pub type SiteSeed = SecretBytes<SEED_LEN>;

// ── Derivation ──────────────────────────────────────────────────────

/// Derive the seed that fully determines one generated password.
///
/// Message layout:
/// `scope ‖ u32be(len(site_name)) ‖ site_name ‖ u32be(counter)`,
/// with `‖ u32be(len(context)) ‖ context` appended when a key context
/// is supplied. Length prefixes count UTF-8 bytes. Note that a present
/// but empty context still appends its zero length prefix, so
/// `Some("")` and `None` derive different seeds.
///
/// # Arguments
/// - `master_key`: 64-byte key from [`crate::kdf::master_key`], used whole as the HMAC key
/// - `scope`: what the derived value is for (password, login name, answer)
/// - `site_name`: the site, exactly as the user entered it
/// - `counter`: ≥ 1; bump it to roll a new password for the same site
///   without changing the master secret
/// - `context`: optional narrowing input (e.g. the text of a security question)
///
/// # Errors
/// Returns `CryptoError::EmptyInput` for an empty site name and
/// `CryptoError::InvalidArgument` for counter 0 or inputs longer than
/// `u32::MAX` bytes.
pub fn site_seed(
    master_key: &MasterKey,
    scope: KeyScope,
    site_name: &str,
    counter: u32,
    context: Option<&str>,
) -> Result<SiteSeed, CryptoError> {
    if site_name.is_empty() {
        return Err(CryptoError::EmptyInput("site name"));
    }
    if counter == 0 {
        return Err(CryptoError::InvalidArgument(
            "site counter must be at least 1".into(),
        ));
    }

    let mut message = seed_message(scope, site_name, counter, context)?;
    let key = hmac::Key::new(hmac::HMAC_SHA256, master_key.expose());
    let tag = hmac::sign(&key, &message);
    message.zeroize();

    // HMAC-SHA256 tags are exactly SEED_LEN bytes.
    let mut seed = [0u8; SEED_LEN];
    seed.copy_from_slice(tag.as_ref());
    let out = SecretBytes::new(seed);
    seed.zeroize();
    Ok(out)
}

/// Assemble the HMAC message: scope, length-prefixed site name, counter,
/// optional length-prefixed context.
fn seed_message(
    scope: KeyScope,
    site_name: &str,
    counter: u32,
    context: Option<&str>,
) -> Result<Vec<u8>, CryptoError> {
    let site = site_name.as_bytes();
    let site_len = u32::try_from(site.len()).map_err(|_| {
        CryptoError::InvalidArgument(format!("site name too long: {} bytes", site.len()))
    })?;

    let mut message = Vec::new();
    message.extend_from_slice(scope.scope());
    message.extend_from_slice(&site_len.to_be_bytes());
    message.extend_from_slice(site);
    message.extend_from_slice(&counter.to_be_bytes());

    if let Some(context) = context {
        let ctx = context.as_bytes();
        let ctx_len = u32::try_from(ctx.len()).map_err(|_| {
            CryptoError::InvalidArgument(format!("key context too long: {} bytes", ctx.len()))
        })?;
        message.extend_from_slice(&ctx_len.to_be_bytes());
        message.extend_from_slice(ctx);
    }

    Ok(message)
}

// ── Tests ───────────────────────────────────────────────────────────
