//! HTTP client construction.

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

/// Options for constructing an HTTP client.
#[derive(Debug)]
pub struct HttpClientOptions {
    /// Application version for the User-Agent header.
    pub app_version: String,
}

/// Build a reqwest client carrying the GitHub default headers.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&user_agent(&opts.app_version))?,
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    debug!(version = %opts.app_version, "Building HTTP client");

    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

/// User-Agent string sent with every request.
pub fn user_agent(version: &str) -> String {
    format!("gists-cli/{version}")
}
