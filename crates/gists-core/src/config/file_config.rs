//! File-based credential store.
//!
//! Reads/writes the `credentials` section of `~/.gistsrc`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CredentialStore, config_path, non_blank};
use crate::errors::ConfigError;

/// Credential store backed by a YAML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    credentials: Credentials,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

impl FileStore {
    /// Load the store from its default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_path())
    }

    /// Load the store from a specific path. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        debug!(path = %path.display(), "Loading credentials");

        let data = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
                path: path.display().to_string(),
                source: e,
            })?;
            if content.trim().is_empty() {
                StoreFile::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        } else {
            StoreFile::default()
        };

        Ok(Self { path, data })
    }
}

impl CredentialStore for FileStore {
    fn user(&self) -> Option<String> {
        non_blank(self.data.credentials.user.as_ref())
    }

    fn password(&self) -> Option<String> {
        non_blank(self.data.credentials.password.as_ref())
    }

    fn token(&self) -> Option<String> {
        non_blank(self.data.credentials.token.as_ref())
    }

    fn set_user(&mut self, user: &str) {
        self.data.credentials.user = Some(user.to_string());
    }

    fn set_password(&mut self, password: &str) {
        self.data.credentials.password = Some(password.to_string());
    }

    fn set_token(&mut self, token: &str) {
        self.data.credentials.token = Some(token.to_string());
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml =
            serde_yaml::to_string(&self.data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let write_err = |source: std::io::Error| ConfigError::WriteFile {
            path: self.path.display().to_string(),
            source,
        };

        // The file holds a plaintext password or token: owner access only.
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(write_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }
        file.write_all(yaml.as_bytes()).map_err(write_err)?;
        debug!(path = %self.path.display(), "Credentials written");

        Ok(())
    }
}
