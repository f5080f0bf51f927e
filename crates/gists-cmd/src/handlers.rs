//! Argument resolution.
//!
//! Command-line values win over the credential store; a missing user or
//! credential aborts the command with a [`ConfigError`] before any request
//! is made.

use std::path::{Path, PathBuf};

use clap::Args;
use gists_api::Auth;
use gists_core::{ConfigError, CredentialStore};

/// Credential flags shared by the commands that talk to GitHub as a user.
#[derive(Debug, Default, Clone, Args)]
pub struct CredentialArgs {
    /// GitHub user name (defaults to the one in the configuration file).
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Personal access token.
    #[arg(short = 't', long, env = "GISTS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Account password.
    #[arg(long, env = "GISTS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl CredentialArgs {
    /// The user name from `--user` or the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUser`] if neither has one.
    pub fn resolve_user(&self, store: &dyn CredentialStore) -> Result<String, ConfigError> {
        non_blank(self.user.as_deref())
            .map(str::to_string)
            .or_else(|| store.user())
            .ok_or(ConfigError::MissingUser)
    }

    /// The credential to authenticate `user` with.
    ///
    /// Order: `--token`, `--password`, stored token, stored password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if none is available.
    pub fn resolve_auth(
        &self,
        user: &str,
        store: &dyn CredentialStore,
    ) -> Result<Auth, ConfigError> {
        if let Some(token) = non_blank(self.token.as_deref()) {
            return Ok(Auth::token(token));
        }
        if let Some(password) = non_blank(self.password.as_deref()) {
            return Ok(Auth::basic(user, password));
        }
        if let Some(token) = store.token() {
            return Ok(Auth::token(token));
        }
        if let Some(password) = store.password() {
            return Ok(Auth::basic(user, password));
        }
        Err(ConfigError::MissingCredential)
    }

    /// Whatever credential is available, without failing.
    ///
    /// A password is only usable when a user name is known too.
    pub fn optional_auth(&self, store: &dyn CredentialStore) -> Option<Auth> {
        match self.resolve_user(store) {
            Ok(user) => self.resolve_auth(&user, store).ok(),
            Err(_) => non_blank(self.token.as_deref())
                .map(str::to_string)
                .or_else(|| store.token())
                .map(Auth::token),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept either a bare gist id or a gist URL.
pub fn gist_id(arg: &str) -> String {
    if let Ok(parsed) = url::Url::parse(arg)
        && let Some(segment) = parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
    {
        return segment.to_string();
    }
    arg.trim_end_matches('/').to_string()
}

/// Directory to read inputs from or write downloads into; defaults to `.`.
pub fn working_dir(dir: Option<&Path>) -> PathBuf {
    dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Path of `filename` inside `dir` (or the current directory).
pub fn input_path(dir: Option<&Path>, filename: &str) -> PathBuf {
    working_dir(dir).join(filename)
}
