//! API error types.

/// Failure to complete an HTTP exchange.
///
/// A non-success reply from GitHub is not an error at this level: it comes
/// back as an [`ApiResponse`](crate::ApiResponse) whose `is_ok()` is false.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Network/transport error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The base URL could not be joined with an endpoint path.
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    /// A raw file download answered with a non-success status.
    #[error("HTTP {status} while downloading {url}")]
    Download {
        /// HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// Writing a downloaded file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
