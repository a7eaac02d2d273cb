//! Password templates and character-class mapping.
//!
//! A template is a short string of class symbols (`C` = upper consonant,
//! `v` = lower vowel, `n` = digit, `o` = symbol, …). The site seed picks
//! one template from the class's set (byte 0) and then one character per
//! template position (bytes 1..), which turns 32 seed bytes into a
//! memorable-shaped password. The tables are part of the output
//! contract and must never change.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::seed::SiteSeed;

// ── Constants ───────────────────────────────────────────────────────

/// Longest template the 32-byte seed can fill: byte 0 selects the
/// template, bytes 1..32 select characters.
pub const MAX_TEMPLATE_LEN: usize = 31;

// ── Password classes ────────────────────────────────────────────────

/// Shape of a generated password, from strongest to most convenient.
///
/// Serializes as the integer discriminant 0–5 (`Maximum` = 0 … `Pin` =
/// 5) — the wire form settings caches store under `PasswordType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PasswordClass {
    /// 20 characters, full symbol range. For sites that accept anything.
    Maximum,
    /// 14 characters, pronounceable syllables with a digit and a symbol.
    /// The default.
    Long,
    /// 8 characters, pronounceable with a digit and a symbol.
    Medium,
    /// 8 characters, letters and digits only.
    Basic,
    /// 4 characters, one syllable and a digit.
    Short,
    /// 4 digits.
    Pin,
}

impl From<PasswordClass> for u8 {
    fn from(class: PasswordClass) -> Self {
        match class {
            PasswordClass::Maximum => 0,
            PasswordClass::Long => 1,
            PasswordClass::Medium => 2,
            PasswordClass::Basic => 3,
            PasswordClass::Short => 4,
            PasswordClass::Pin => 5,
        }
    }
}

impl TryFrom<u8> for PasswordClass {
    type Error = CryptoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Maximum),
            1 => Ok(Self::Long),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Basic),
            4 => Ok(Self::Short),
            5 => Ok(Self::Pin),
            other => Err(CryptoError::InvalidArgument(format!(
                "unknown password class: {other}"
            ))),
        }
    }
}

// ── Template tables ─────────────────────────────────────────────────

static MAXIMUM_TEMPLATES: [&str; 2] = ["anoxxxxxxxxxxxxxxxxx", "axxxxxxxxxxxxxxxxxno"];

static LONG_TEMPLATES: [&str; 21] = [
    "CvcvnoCvcvCvcv",
    "CvcvCvcvnoCvcv",
    "CvcvCvcvCvcvno",
    "CvccnoCvcvCvcv",
    "CvccCvcvnoCvcv",
    "CvccCvcvCvcvno",
    "CvcvnoCvccCvcv",
    "CvcvCvccnoCvcv",
    "CvcvCvccCvcvno",
    "CvcvnoCvcvCvcc",
    "CvcvCvcvnoCvcc",
    "CvcvCvcvCvccno",
    "CvccnoCvccCvcv",
    "CvccCvccnoCvcv",
    "CvccCvccCvcvno",
    "CvcvnoCvccCvcc",
    "CvcvCvccnoCvcc",
    "CvcvCvccCvccno",
    "CvccnoCvcvCvcc",
    "CvccCvcvnoCvcc",
    "CvccCvcvCvccno",
];

static MEDIUM_TEMPLATES: [&str; 2] = ["CvcnoCvc", "CvcCvcno"];

static BASIC_TEMPLATES: [&str; 3] = ["aaanaaan", "aannaaan", "aaannaaa"];

static SHORT_TEMPLATES: [&str; 1] = ["Cvcn"];

static PIN_TEMPLATES: [&str; 1] = ["nnnn"];

static NAME_TEMPLATES: [&str; 1] = ["cvccvcvcv"];

static PHRASE_TEMPLATES: [&str; 3] = [
    "cvcc cvc cvccvcv cvc",
    "cvc cvccvcvcv cvcv",
    "cv cvccv cvc cvcvccv",
];

/// Template set for a password class.
#[must_use]
pub fn password_templates(class: PasswordClass) -> &'static [&'static str] {
    match class {
        PasswordClass::Maximum => &MAXIMUM_TEMPLATES,
        PasswordClass::Long => &LONG_TEMPLATES,
        PasswordClass::Medium => &MEDIUM_TEMPLATES,
        PasswordClass::Basic => &BASIC_TEMPLATES,
        PasswordClass::Short => &SHORT_TEMPLATES,
        PasswordClass::Pin => &PIN_TEMPLATES,
    }
}

/// Template set for derived login names (all-lowercase syllables).
#[must_use]
pub fn login_name_templates() -> &'static [&'static str] {
    &NAME_TEMPLATES
}

/// Template set for derived security answers (lowercase word phrases).
#[must_use]
pub fn security_answer_templates() -> &'static [&'static str] {
    &PHRASE_TEMPLATES
}

// ── Character classes ───────────────────────────────────────────────

/// Alphabet for a template class symbol, or `None` for an unknown
/// symbol. Ordering within each alphabet is part of the output contract.
#[must_use]
pub fn alphabet(symbol: u8) -> Option<&'static str> {
    match symbol {
        b'V' => Some("AEIOU"),
        b'C' => Some("BCDFGHJKLMNPQRSTVWXYZ"),
        b'v' => Some("aeiou"),
        b'c' => Some("bcdfghjklmnpqrstvwxyz"),
        b'A' => Some("AEIOUBCDFGHJKLMNPQRSTVWXYZ"),
        b'a' => Some("AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz"),
        b'n' => Some("0123456789"),
        b'o' => Some("@&%?,=[]_:-+*$#!'^~;()/."),
        b'x' => {
            Some("AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz0123456789!@#$%^&*()")
        }
        b' ' => Some(" "),
        _ => None,
    }
}

// ── Filling ─────────────────────────────────────────────────────────

/// Turn a site seed into the final output string.
///
/// Byte 0 of the seed selects the template (`seed[0] mod len`); each
/// template symbol at position `i` then selects one character from its
/// alphabet (`seed[i + 1] mod len`). Byte 0 is never reused for a
/// character.
///
/// # Errors
///
/// Returns `CryptoError::InvalidArgument` for an empty template set or
/// an unrecognized class symbol, and
/// `CryptoError::UnsupportedTemplateLength` for a template longer than
/// [`MAX_TEMPLATE_LEN`] — the seed has no bytes to fill it with, and
/// truncating would silently weaken the output.
pub fn fill_template(seed: &SiteSeed, templates: &[&str]) -> Result<String, CryptoError> {
    if templates.is_empty() {
        return Err(CryptoError::InvalidArgument(
            "template set must not be empty".into(),
        ));
    }

    let seed_bytes = seed.expose();
    // templates verified non-empty above, so the modulo cannot divide by zero.
    #[allow(clippy::arithmetic_side_effects)]
    let template = templates[usize::from(seed_bytes[0]) % templates.len()];

    if template.len() > MAX_TEMPLATE_LEN {
        return Err(CryptoError::UnsupportedTemplateLength {
            length: template.len(),
        });
    }

    let mut output = String::with_capacity(template.len());
    for (symbol, &byte) in template.bytes().zip(&seed_bytes[1..]) {
        let alpha = alphabet(symbol).ok_or_else(|| {
            CryptoError::InvalidArgument(format!(
                "unknown template symbol: {:?}",
                char::from(symbol)
            ))
        })?;
        // Every alphabet is a non-empty static string.
        #[allow(clippy::arithmetic_side_effects)]
        let index = usize::from(byte) % alpha.len();
        output.push(char::from(alpha.as_bytes()[index]));
    }

    Ok(output)
}

// ── Tests ───────────────────────────────────────────────────────────
