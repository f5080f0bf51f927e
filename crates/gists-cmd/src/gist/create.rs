//! `gists create` command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use gists_api::Client;
use gists_api::model::NewGist;

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, input_path};
use crate::outcome::{Action, ActionError, Outcome, Payload, checked, gist_from};

/// Create a gist from local files.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Files to upload, relative to the input directory.
    #[arg(short = 'f', long = "file", value_name = "FILENAME", required = true, num_args = 1..)]
    filenames: Vec<String>,

    /// Create a private gist.
    #[arg(short = 'p', long)]
    private: bool,

    /// Directory the files are read from (defaults to the current one).
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Description for the gist.
    #[arg(short = 'd', long)]
    description: Option<String>,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl CreateArgs {
    /// Run the create command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let outcome = create(
            &client,
            &self.filenames,
            self.input_dir.as_deref(),
            self.description.clone(),
            !self.private,
        )
        .await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Upload `filenames`, read from `input_dir`, as a new gist.
pub async fn create(
    client: &Client,
    filenames: &[String],
    input_dir: Option<&Path>,
    description: Option<String>,
    public: bool,
) -> Outcome {
    let names = unique_gist_filenames(filenames)?;
    let mut payload = NewGist::new(description.filter(|d| !d.is_empty()), public);
    for (filename, name) in filenames.iter().zip(names) {
        let content = read_input(&input_path(input_dir, filename)).await?;
        payload.add_file(name, content);
    }
    debug!(files = filenames.len(), public, "Creating gist");

    let resp = checked(Action::Create, client.create_gist(&payload)).await?;
    gist_from(resp).map(Payload::Gist)
}

/// Read a local file to upload.
pub(crate) async fn read_input(path: &Path) -> Result<String, ActionError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ActionError::LocalFile {
            path: path.display().to_string(),
            source,
        })
}

/// Name a local file gets inside the gist: its last path component.
pub(crate) fn gist_filename(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map_or_else(|| filename.to_string(), |n| n.to_string_lossy().into_owned())
}

/// Gist file names for `filenames`, in order.
///
/// Fails on the first name that two paths share, e.g. `a/x.py` and `b/x.py`.
pub(crate) fn unique_gist_filenames(filenames: &[String]) -> Result<Vec<String>, ActionError> {
    let mut seen = HashSet::new();
    filenames
        .iter()
        .map(|filename| {
            let name = gist_filename(filename);
            if seen.insert(name.clone()) {
                Ok(name)
            } else {
                Err(ActionError::DuplicateName { name })
            }
        })
        .collect()
}
