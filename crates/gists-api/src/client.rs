//! GitHub Gists API client.
//!
//! Every method issues exactly one request and hands back the status and
//! parsed JSON body. Callers decide what a non-success reply means.

use std::path::Path;

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::model::{AuthorizationRequest, GistPatch, NewGist};

/// Default GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// Credential attached to a request.
#[derive(Clone)]
pub enum Auth {
    /// HTTP basic authentication.
    Basic {
        /// GitHub login.
        username: String,
        /// Account password.
        password: SecretString,
    },
    /// Personal access token, sent as the `access_token` query parameter.
    Token(SecretString),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
        }
    }
}

impl Auth {
    /// Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Token credentials.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(SecretString::from(token.into()))
    }

    fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                req.basic_auth(username, Some(password.expose_secret()))
            }
            Self::Token(token) => req.query(&[("access_token", token.expose_secret())]),
        }
    }
}

/// Status and body of one API reply.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// Build a response from its parts.
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    /// Parsed body, `Value::Null` when empty or not JSON.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Take ownership of the body.
    pub fn into_body(self) -> Value {
        self.body
    }

    /// The `message` field GitHub puts in error replies.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// GitHub Gists API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    auth: Option<Auth>,
}

impl Client {
    /// Client against the public GitHub API.
    pub fn new(http: reqwest::Client, auth: Option<Auth>) -> Self {
        Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
            auth,
        }
    }

    /// Point the client at another API root, such as a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(url)?;
        let mut base = parsed.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_url = base;
        Ok(self)
    }

    /// List a user's public gists, or all of them when authenticated as that user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn list_gists(&self, user: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, &format!("users/{user}/gists"), None::<&()>)
            .await
    }

    /// List the authenticated user's starred gists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn list_starred_gists(&self) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, "gists/starred", None::<&()>).await
    }

    /// Fetch a single gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get_gist(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, &format!("gists/{id}"), None::<&()>)
            .await
    }

    /// Create a gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn create_gist(&self, payload: &NewGist) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, "gists", Some(payload)).await
    }

    /// Apply a patch to a gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn update_gist(&self, id: &str, patch: &GistPatch) -> Result<ApiResponse, ApiError> {
        self.send(Method::PATCH, &format!("gists/{id}"), Some(patch))
            .await
    }

    /// Delete a gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn delete_gist(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::DELETE, &format!("gists/{id}"), None::<&()>)
            .await
    }

    /// Fork a gist into the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn fork_gist(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, &format!("gists/{id}/forks"), None::<&()>)
            .await
    }

    /// Star a gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn star_gist(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::PUT, &format!("gists/{id}/star"), None::<&()>)
            .await
    }

    /// Remove the star from a gist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn unstar_gist(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::DELETE, &format!("gists/{id}/star"), None::<&()>)
            .await
    }

    /// List the account's authorizations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn list_authorizations(&self) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, "authorizations", None::<&()>).await
    }

    /// Request a new authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn create_authorization(
        &self,
        payload: &AuthorizationRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, "authorizations", Some(payload)).await
    }

    /// Stream a raw file into `dest`, replacing any existing file.
    ///
    /// The body lands in a temporary file next to `dest` that only replaces
    /// it once the whole body has arrived. Returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// filesystem error.
    pub async fn download(&self, raw_url: &str, dest: &Path) -> Result<u64, ApiError> {
        info!(url = raw_url, path = %dest.display(), "Downloading");
        let mut resp = self.http.get(raw_url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Download {
                status: resp.status().as_u16(),
                url: raw_url.to_string(),
            });
        }

        let io_err = |source: std::io::Error| ApiError::Io {
            path: dest.display().to_string(),
            source,
        };
        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let partial = NamedTempFile::new_in(dir).map_err(io_err)?;
        let mut file =
            tokio::fs::File::from_std(partial.as_file().try_clone().map_err(io_err)?);
        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            file.write_all(&chunk).await.map_err(io_err)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(io_err)?;
        drop(file);
        partial.persist(dest).map_err(|err| io_err(err.error))?;
        debug!(bytes = written, "Download complete");

        Ok(written)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!(method = %method, url = %url, "Sending request");

        let mut req = self.http.request(method, url);
        if let Some(auth) = &self.auth {
            req = auth.apply(req);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!(status = status.as_u16(), "Received response");

        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or(Value::Null)
}
