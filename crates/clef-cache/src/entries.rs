//! Per-site settings entries and the map a cache blob decrypts to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use clef_crypto_core::PasswordClass;

// ── Types ───────────────────────────────────────────────────────────────────

/// Last-used settings for one site.
///
/// Fields serialize under their legacy PascalCase names so blobs written by
/// earlier front-ends load unchanged, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheEntry {
    /// User identity the password was generated for.
    pub user_name: String,
    /// Site name, repeated inside the entry as the legacy shape requires.
    pub site_name: String,
    /// Counter in effect, at least 1.
    pub site_counter: u32,
    /// Password class, serialized as its integer discriminant.
    pub password_type: PasswordClass,
}

/// All remembered settings for one master secret, keyed by site name.
///
/// A `BTreeMap` keeps the serialized form canonical; JSON object order is
/// insignificant to parsers, so legacy blobs load regardless of how their
/// writer ordered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheEntries {
    entries: BTreeMap<String, CacheEntry>,
}

// ── Operations ──────────────────────────────────────────────────────────────

impl CacheEntries {
    /// Empty settings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sites with remembered settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no site has remembered settings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembered settings for `site_name`, if any.
    #[must_use]
    pub fn get(&self, site_name: &str) -> Option<&CacheEntry> {
        self.entries.get(site_name)
    }

    /// Record `entry` as the last-used settings for its site, replacing any
    /// earlier entry. The map key is the entry's own site name.
    pub fn touch(&mut self, entry: CacheEntry) {
        self.entries.insert(entry.site_name.clone(), entry);
    }

    /// Forget the settings for `site_name`, returning the removed entry.
    pub fn remove(&mut self, site_name: &str) -> Option<CacheEntry> {
        self.entries.remove(site_name)
    }

    /// Entries in site-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries.iter()
    }
}
