//! On-disk store: one encrypted settings blob per master secret.
//!
//! Each blob lives at `<fingerprint hex>.dat` inside the store directory,
//! where the fingerprint is derived from the master secret alone. The file
//! name therefore reveals nothing about the secret beyond equality, and two
//! secrets never share a blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use clef_crypto_core::{encryption_key, fingerprint};

use crate::cipher;
use crate::entries::CacheEntries;
use crate::error::CacheError;

/// Settings-cache store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Store under the platform-local data directory, in a `clef` subfolder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the platform defines no local data
    /// directory.
    pub fn open_default() -> Result<Self, CacheError> {
        let base = dirs::data_local_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "no local data directory on this platform",
            )
        })?;
        Ok(Self::open(base.join("clef")))
    }

    /// Store under an explicit directory. The directory is created lazily on
    /// the first save.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize, encrypt, and atomically replace this secret's blob.
    ///
    /// The plaintext is written to a hidden temp file first and moved into
    /// place with `rename`, so a crash mid-write never leaves a truncated
    /// blob behind. On Unix the blob is readable by its owner only.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Crypto`] if key derivation fails,
    /// [`CacheError::Encryption`] if the IV cannot be drawn, and
    /// [`CacheError::Io`] for filesystem failures.
    pub fn save(&self, master_secret: &str, entries: &CacheEntries) -> Result<(), CacheError> {
        let file_name = blob_file_name(master_secret)?;
        let key = encryption_key(master_secret)?;

        let mut json = serde_json::to_vec(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let encrypted = cipher::encrypt(&key, &json);
        json.zeroize();
        let blob = encrypted?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&file_name);
        let tmp = self.dir.join(format!(".{file_name}.tmp"));

        fs::write(&tmp, &blob)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Decrypt and parse this secret's blob.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if no blob exists,
    /// [`CacheError::Decryption`] if the blob does not decrypt under the
    /// derived key, and [`CacheError::Corrupt`] if it is malformed or its
    /// plaintext is not a settings map. A wrong master secret surfaces as
    /// `Decryption` or `Corrupt`; the legacy format cannot tell it apart
    /// from damage.
    pub fn load(&self, master_secret: &str) -> Result<CacheEntries, CacheError> {
        let path = self.blob_path(master_secret)?;
        let blob = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(CacheError::NotFound),
            Err(e) => return Err(CacheError::Io(e)),
        };

        // Only pay for the second derivation once a blob actually exists.
        let key = encryption_key(master_secret)?;
        let plaintext = cipher::decrypt(&key, &blob)?;
        let entries = serde_json::from_slice(plaintext.expose())
            .map_err(|e| CacheError::Corrupt(format!("not a settings map: {e}")))?;
        Ok(entries)
    }

    /// Whether a blob exists for this master secret.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Crypto`] if the fingerprint derivation fails.
    pub fn exists(&self, master_secret: &str) -> Result<bool, CacheError> {
        Ok(self.blob_path(master_secret)?.exists())
    }

    /// Remove this secret's blob, reporting whether one was present.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Crypto`] if the fingerprint derivation fails
    /// and [`CacheError::Io`] for filesystem failures other than a missing
    /// blob.
    pub fn delete(&self, master_secret: &str) -> Result<bool, CacheError> {
        let path = self.blob_path(master_secret)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    fn blob_path(&self, master_secret: &str) -> Result<PathBuf, CacheError> {
        Ok(self.dir.join(blob_file_name(master_secret)?))
    }
}

/// Blob file name for a master secret: `<fingerprint hex>.dat`.
fn blob_file_name(master_secret: &str) -> Result<String, CacheError> {
    let id = fingerprint(master_secret)?;
    Ok(format!("{}.dat", id.to_hex()))
}
