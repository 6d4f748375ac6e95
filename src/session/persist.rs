//! Durable session record.
//!
//! A single `{user, token}` record written to a known path on successful
//! registration or login commit, and read back at process start. What a
//! consumer does with the restored record (auto-login, token refresh) is
//! outside this crate.

use super::models::User;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// The on-disk record. Exactly the two documented fields, camel-cased like
/// everything that crosses the client boundary.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub user: User,
    pub token: String,
}

/// Errors raised by the durable session record.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("can't access session file: {0}")]
    Io(#[from] io::Error),

    /// The file exists but does not hold a valid record. Distinct from
    /// absence so callers can tell a corrupt record from a first run.
    #[error("session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// File-backed store for the session record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a handle for the record at `path`. Nothing is touched on disk
    /// until the first `save`/`load`/`clear`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the record lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the record, creating parent directories as needed. Replaces any
    /// previous record wholesale.
    pub fn save(&self, user: &User, token: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let record = StoredSession {
            user: user.clone(),
            token: token.to_owned(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }

    /// Read the record back.
    ///
    /// A missing file is `Ok(None)` (first run), not an error.
    ///
    /// # Errors
    ///
    /// * `StorageError::Io` - the file exists but can't be read
    /// * `StorageError::Corrupt` - the file exists but isn't a valid record
    pub fn load(&self) -> StorageResult<Option<StoredSession>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Remove the record. Removing an absent record is fine.
    pub fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
