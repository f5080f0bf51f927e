//! Core types, traits, and utilities for the gists CLI.
//!
//! This crate provides the foundational abstractions used across all gists crates:
//! - [`IOStreams`] for terminal I/O handling
//! - [`CredentialStore`] trait for the persisted `credentials` section
//! - [`Prompter`] trait for interactive prompts
//! - Table rendering and color schemes

pub mod config;
pub mod errors;
pub mod iostreams;
pub mod prompter;
pub mod table;
#[cfg(test)]
pub mod test_utils;

pub use config::CredentialStore;
pub use errors::ConfigError;
pub use iostreams::IOStreams;
pub use prompter::Prompter;
