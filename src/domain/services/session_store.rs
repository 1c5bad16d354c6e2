#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::path;
use std::sync::RwLock;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;

/// Owns the persisted session. Every component that needs the token goes
/// through this store; nothing else touches the session file. Writes are
/// serialized behind the lock so a sign-out cannot race a concurrent
/// authenticated request reading the token.
pub struct SessionStore {
    file_path: path::PathBuf,
    current: RwLock<Option<Session>>,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        return SessionStore::new(path::PathBuf::from(Config::get(ConfigKey::SessionFile)));
    }
}

impl SessionStore {
    pub fn new(file_path: path::PathBuf) -> SessionStore {
        return SessionStore {
            file_path,
            current: RwLock::new(None),
        };
    }

    /// Reads the session file into the in-memory snapshot. A missing file
    /// means signed out, which is not an error.
    pub async fn load(&self) -> Result<()> {
        if !self.file_path.exists() {
            *self.current.write().unwrap() = None;
            return Ok(());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        let session: Session = serde_yaml::from_str(&payload)?;
        *self.current.write().unwrap() = Some(session);

        return Ok(());
    }

    pub async fn save(&self, session: Session) -> Result<()> {
        let payload = serde_yaml::to_string(&session)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;

        *self.current.write().unwrap() = Some(session);
        return Ok(());
    }

    /// Sign out: clears the snapshot and removes the file.
    pub async fn clear(&self) -> Result<()> {
        *self.current.write().unwrap() = None;

        if self.file_path.exists() {
            fs::remove_file(&self.file_path).await?;
        }

        return Ok(());
    }

    /// Atomic read of the current session.
    pub fn snapshot(&self) -> Option<Session> {
        return self.current.read().unwrap().clone();
    }
}
