//! Credential store for the gists CLI.
//!
//! The store is a small YAML file (`~/.gistsrc` by default) with a single
//! `credentials` section holding the GitHub user name and either a password
//! or a personal access token.

mod file_config;
mod memory_config;

use std::path::PathBuf;

pub use file_config::FileStore;
pub use memory_config::MemoryStore;

/// Name of the credentials file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".gistsrc";

/// Environment variable that overrides the credentials file location.
pub const CONFIG_ENV: &str = "GISTS_CONFIG";

/// Path of the credentials file (usually `~/.gistsrc`).
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Access to the persisted `credentials` section.
///
/// Getters return `None` for keys that are absent or blank.
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Stored GitHub user name.
    fn user(&self) -> Option<String>;

    /// Stored GitHub password.
    fn password(&self) -> Option<String>;

    /// Stored personal access token.
    fn token(&self) -> Option<String>;

    /// Set the GitHub user name.
    fn set_user(&mut self, user: &str);

    /// Set the GitHub password.
    fn set_password(&mut self, password: &str);

    /// Set the personal access token.
    fn set_token(&mut self, token: &str);

    /// Location the store persists to, for display.
    fn location(&self) -> String;

    /// Persist the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be saved.
    fn write(&self) -> anyhow::Result<()>;
}

/// Treat empty strings as unset.
fn non_blank(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvVarGuard;

    #[test]
    fn test_should_resolve_config_path_from_env_or_home() {
        // Single test so the env var mutations never interleave.
        {
            let _guard = EnvVarGuard::set(CONFIG_ENV, "/tmp/test-gistsrc");
            assert_eq!(config_path(), PathBuf::from("/tmp/test-gistsrc"));
        }
        {
            let _guard = EnvVarGuard::set(CONFIG_ENV, "");
            assert!(config_path().ends_with(CONFIG_FILE_NAME));
        }
        let _guard = EnvVarGuard::unset(CONFIG_ENV);
        assert!(config_path().ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_should_treat_blank_values_as_unset() {
        assert_eq!(non_blank(Some(&"  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(&"jaume".to_string())), Some("jaume".into()));
    }
}
