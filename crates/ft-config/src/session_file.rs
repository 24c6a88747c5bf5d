//! Persisted session slots.
//!
//! The CLI's analog of the browser's two storage slots: one file in the
//! config directory holding the credential string and its numeric expiry
//! marker. Written after login, read at startup, removed on logout or when
//! the expiry watchdog reaps the session.
//!
//! File location: `<config_dir>/session.json`

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = "session.json";

/// Information stored in the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFileInfo {
    /// Bearer credential as issued by the backend
    pub credential: String,
    /// Expiry marker (Unix seconds), when the credential carried one
    pub expiry: Option<i64>,
    /// ISO 8601 timestamp when the session was stored
    pub saved_at: String,
}

impl SessionFileInfo {
    /// Path of the session file in the active config directory.
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(SESSION_FILENAME))
    }

    /// Ensure the parent directory of a path exists.
    fn ensure_parent_dir(path: &Path) -> ConfigErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Write the session file to the active config directory.
    pub fn write(credential: &str, expiry: Option<i64>) -> ConfigErrorResult<PathBuf> {
        Self::write_in(&Config::config_dir()?, credential, expiry)
    }

    /// Write to a specific config directory.
    pub fn write_in(
        config_dir: &Path,
        credential: &str,
        expiry: Option<i64>,
    ) -> ConfigErrorResult<PathBuf> {
        let path = config_dir.join(SESSION_FILENAME);

        Self::ensure_parent_dir(&path)?;

        let info = SessionFileInfo {
            credential: credential.to_string(),
            expiry,
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session file: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the session file from the active config directory.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be read or parsed.
    pub fn read() -> ConfigErrorResult<Option<SessionFileInfo>> {
        Self::read_in(&Config::config_dir()?)
    }

    /// Read from a specific config directory.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<SessionFileInfo>> {
        let path = config_dir.join(SESSION_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let info = serde_json::from_str(&content)
            .map_err(|e| ConfigError::session(format!("Failed to parse session file: {e}")))?;

        Ok(Some(info))
    }

    /// Remove the session file from the active config directory. Removing a
    /// file that does not exist is not an error.
    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    /// Remove from a specific config directory.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(SESSION_FILENAME);

        if !path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&path).map_err(|e| ConfigError::Io { path, source: e })
    }
}
