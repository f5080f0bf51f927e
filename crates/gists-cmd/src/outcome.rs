//! Uniform result of every action.

use gists_api::model::{Gist, GistFile};
use gists_api::{ApiError, ApiResponse};
use tracing::warn;

/// What an action produced.
pub type Outcome = Result<Payload, ActionError>;

/// Successful action result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A single gist, shown as a field dump.
    Gist(Gist),
    /// A single file, shown with its content.
    File(GistFile),
    /// Several gists, shown as a table.
    Gists(Vec<Gist>),
    /// A plain confirmation line.
    Message(String),
}

/// The operation that failed, used to pick the error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Listing gists.
    List,
    /// Showing a gist or file.
    Show,
    /// Downloading a file.
    Download,
    /// Creating a gist.
    Create,
    /// Updating a gist.
    Update,
    /// Deleting a gist.
    Delete,
    /// Obtaining a token.
    Authorize,
    /// Forking a gist.
    Fork,
    /// Starring a gist.
    Star,
    /// Unstarring a gist.
    Unstar,
}

impl Action {
    fn failure(self) -> &'static str {
        match self {
            Self::List => "Can not return the list of gists.",
            Self::Show => "Can not show gist file.",
            Self::Download => "Can not download gist file.",
            Self::Create => "Can not create the gist.",
            Self::Update => "Can not update the gist.",
            Self::Delete => "Can not delete the gist.",
            Self::Authorize => "Could not get an authorization token.",
            Self::Fork => "Can not fork the gist.",
            Self::Star => "Can not star the gist.",
            Self::Unstar => "Can not unstar the gist.",
        }
    }
}

/// Why an action failed. The display text is what the user sees.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// GitHub refused the request.
    #[error("{} Github reason: '{reason}'", .action.failure())]
    Api {
        /// Failed operation.
        action: Action,
        /// Server-provided message.
        reason: String,
    },

    /// Transport failure, or an error reply without a readable message.
    #[error("Unhandled exception")]
    Unhandled,

    /// No file requested from a gist holding several.
    #[error(
        "Gist has more than one file. Specify file by '-f' option. Available values are [{}]",
        .available.join(", ")
    )]
    MoreFiles {
        /// File names in the gist.
        available: Vec<String>,
    },

    /// Requested file is not in the gist.
    #[error("File not found in gist. Available values are [{}]", .available.join(", "))]
    FileNotFound {
        /// File names in the gist.
        available: Vec<String>,
    },

    /// `--remove` named a file the gist does not have.
    #[error("Can not remove a file that actually does not exist in gist.")]
    RemoveMissing,

    /// Update named an unknown file without `--new`.
    #[error(
        "Filename not found in gist. Use the '-n' (--new) argument to attach a new file in the gist."
    )]
    UpdateMissing,

    /// `--new` named a file the gist already has.
    #[error(
        "File already exists in Gist. Remove the '-n' (--new) argument if you want to update the existent file. Change the file name if you actually want to upload a new file in the gist."
    )]
    DuplicateNew,

    /// Two of the given paths map to the same file name in the gist.
    #[error("File name '{name}' is given more than once. Gist file names must be unique.")]
    DuplicateName {
        /// The repeated file name.
        name: String,
    },

    /// Delete confirmation was declined.
    #[error("Delete aborted.")]
    DeleteAborted,

    /// A local file could not be read or written.
    #[error("Can not access local file '{path}': {source}")]
    LocalFile {
        /// Path of the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ActionError {
    /// Error for a non-success reply.
    pub fn rejected(action: Action, resp: &ApiResponse) -> Self {
        match resp.message() {
            Some(reason) => Self::Api {
                action,
                reason: reason.to_string(),
            },
            None => {
                warn!(status = resp.status().as_u16(), "Error reply without message");
                Self::Unhandled
            }
        }
    }

    /// Error for a request that never produced a reply.
    pub fn transport(action: Action, err: ApiError) -> Self {
        match err {
            ApiError::Io { path, source } => Self::LocalFile { path, source },
            ApiError::Download { status, .. } => Self::Api {
                action,
                reason: format!("HTTP {status}"),
            },
            other => {
                warn!(error = %other, "Request failed");
                Self::Unhandled
            }
        }
    }

    /// Error for a success reply whose body is not the expected shape.
    pub fn malformed(err: &serde_json::Error) -> Self {
        warn!(error = %err, "Unexpected response body");
        Self::Unhandled
    }
}

/// Await a facade call, keeping only success replies.
///
/// # Errors
///
/// Returns the [`ActionError`] for a transport failure or a non-success reply.
pub async fn checked(
    action: Action,
    reply: impl Future<Output = Result<ApiResponse, ApiError>>,
) -> Result<ApiResponse, ActionError> {
    let resp = reply
        .await
        .map_err(|err| ActionError::transport(action, err))?;
    if resp.is_ok() {
        Ok(resp)
    } else {
        Err(ActionError::rejected(action, &resp))
    }
}

/// Parse the gist carried by a success reply.
///
/// # Errors
///
/// Returns [`ActionError::Unhandled`] if the body is not a gist.
pub fn gist_from(resp: ApiResponse) -> Result<Gist, ActionError> {
    Gist::from_value(resp.into_body()).map_err(|err| ActionError::malformed(&err))
}
