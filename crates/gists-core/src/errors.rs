//! Core error types for the gists CLI.

/// Configuration-specific errors.
///
/// The `Missing*` variants abort a command before any network activity.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path of the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write config file.
    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        /// Path of the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse config.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// No GitHub user name on the command line or in the config file.
    #[error(
        "Can not load GitHub user name neither from '--user (-u)' parameter nor from the configuration file."
    )]
    MissingUser,

    /// No password or token on the command line or in the config file.
    #[error(
        "Credential should be informed via configuration file, '--token (-t)' or '--password' argument."
    )]
    MissingCredential,
}
