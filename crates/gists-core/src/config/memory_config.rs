//! In-memory credential store for testing.

use super::{CredentialStore, non_blank};

/// In-memory credential store. No disk I/O is performed.
///
/// # Examples
///
/// ```
/// use gists_core::config::{CredentialStore, MemoryStore};
///
/// let store = MemoryStore::new().with_user("jaume").with_token("ghp_token123");
/// assert_eq!(store.user().as_deref(), Some("jaume"));
/// assert_eq!(store.token().as_deref(), Some("ghp_token123"));
/// assert!(store.password().is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    user: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored user.
    #[must_use]
    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    /// Set the stored password.
    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Set the stored token.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

impl CredentialStore for MemoryStore {
    fn user(&self) -> Option<String> {
        non_blank(self.user.as_ref())
    }

    fn password(&self) -> Option<String> {
        non_blank(self.password.as_ref())
    }

    fn token(&self) -> Option<String> {
        non_blank(self.token.as_ref())
    }

    fn set_user(&mut self, user: &str) {
        self.user = Some(user.to_string());
    }

    fn set_password(&mut self, password: &str) {
        self.password = Some(password.to_string());
    }

    fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    fn write(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_start_empty() {
        let store = MemoryStore::new();
        assert!(store.user().is_none());
        assert!(store.password().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_should_update_values() {
        let mut store = MemoryStore::new().with_password("old");
        store.set_password("new");
        store.set_user("jaume");
        assert_eq!(store.password().as_deref(), Some("new"));
        assert_eq!(store.user().as_deref(), Some("jaume"));
    }

    #[test]
    fn test_should_hide_blank_token() {
        let store = MemoryStore::new().with_token("");
        assert!(store.token().is_none());
    }
}
