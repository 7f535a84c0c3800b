//! On-disk session persistence.
//!
//! Two entries with fixed names live in the session directory: the raw
//! token and the JSON-serialized identity. They are written together on
//! a successful register/login and removed together on logout, so the
//! pair is either fully present or fully absent for a healthy session.

use crate::session::error::{Result as SessionResult, SessionError};
use crate::session::identity::SessionIdentity;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};

const TOKEN_FILE: &str = "token";
const IDENTITY_FILE: &str = "identity.json";

/// What a load found: the raw token plus the identity stored next to it.
#[derive(Debug, Clone)]
pub struct PersistedSession {
    pub token: String,
    pub identity: SessionIdentity,
}

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist both entries. Each file is written atomically
    /// (temp file + fsync + rename) so a crash mid-write cannot leave
    /// a half-written entry behind.
    pub fn save(&self, token: &str, identity: &SessionIdentity) -> SessionResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        let identity_json = serde_json::to_string_pretty(identity)?;

        self.write_atomic(TOKEN_FILE, token.as_bytes())?;
        self.write_atomic(IDENTITY_FILE, identity_json.as_bytes())?;

        info!("Saved session for {}", identity.email);
        Ok(())
    }

    /// Read the persisted session, if any.
    ///
    /// Absent files mean no session. An unreadable or unparsable pair
    /// also yields `None` - a broken session fails safe to logged-out;
    /// the broken identity file is set aside for inspection first.
    pub fn load(&self) -> Option<PersistedSession> {
        let token_path = self.dir.join(TOKEN_FILE);
        let identity_path = self.dir.join(IDENTITY_FILE);

        if !token_path.exists() || !identity_path.exists() {
            return None;
        }

        let token = match fs::read_to_string(&token_path) {
            Ok(token) => token,
            Err(e) => {
                warn!("Unreadable session token at {token_path:?}: {e}");
                return None;
            }
        };

        let contents = match fs::read_to_string(&identity_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Unreadable session identity at {identity_path:?}: {e}");
                return None;
            }
        };

        match serde_json::from_str::<SessionIdentity>(&contents) {
            Ok(identity) => Some(PersistedSession { token, identity }),
            Err(e) => {
                warn!("Session identity corrupted at {identity_path:?}: {e}");
                self.backup_corrupted(&identity_path);
                None
            }
        }
    }

    /// Remove both entries. Already-gone files are fine.
    pub fn clear(&self) -> SessionResult<()> {
        for name in [TOKEN_FILE, IDENTITY_FILE] {
            let path = self.dir.join(name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(SessionError::file_remove(path, e)),
            }
        }
        Ok(())
    }

    fn write_atomic(&self, name: &str, bytes: &[u8]) -> SessionResult<()> {
        let final_path = self.dir.join(name);
        let temp_path = self
            .dir
            .join(format!("{}.tmp.{}", name, std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(bytes)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })
    }

    /// Set a corrupted identity file aside for debugging. Best effort.
    fn backup_corrupted(&self, path: &Path) {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let backup = self.dir.join(format!("{}.corrupted.{}", IDENTITY_FILE, stamp));

        match fs::rename(path, &backup) {
            Ok(()) => warn!("Backed up corrupted session identity to {backup:?}"),
            Err(e) => warn!("Could not back up corrupted session identity: {e}"),
        }
    }
}
