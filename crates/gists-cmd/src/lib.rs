//! Command implementations for the gists CLI.
//!
//! Each command resolves its arguments ([`handlers`]), runs one action
//! against the API into an [`outcome::Outcome`], and prints it through
//! [`formatters`].

pub mod factory;
pub mod formatters;
pub mod gist;
pub mod handlers;
pub mod outcome;
pub mod version;

#[cfg(test)]
pub mod test_helpers;
