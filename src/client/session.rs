//! Persisted login session
//!
//! The last successful signup or login is kept in `session.json` under the
//! client data directory. There is no token: the stored `{id, email}` is the
//! current user until logout removes the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::client::error::ClientError;
use crate::shared::UserRef;

pub const SESSION_FILE: &str = "session.json";

/// File-backed store for the current user
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored user, if any
    ///
    /// A missing, unreadable or malformed file counts as no session.
    pub fn load(&self) -> Option<UserRef> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read session");
                return None;
            }
        };

        match serde_json::from_str::<UserRef>(&raw) {
            Ok(user) if !user.id.is_empty() && !user.email.is_empty() => Some(user),
            Ok(_) => {
                tracing::warn!("ignoring session with empty id or email");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed session file");
                None
            }
        }
    }

    pub fn save(&self, user: &UserRef) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(user)?)?;
        Ok(())
    }

    /// Forget the stored user; a missing file is not an error
    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
