//! `gists update` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use gists_api::Client;
use gists_api::model::{FileChange, GistFile, GistPatch};

use super::create::{read_input, unique_gist_filenames};
use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id, input_path};
use crate::outcome::{Action, ActionError, Outcome, Payload, checked, gist_from};

/// Update a gist's description or files.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// The gist ID or URL.
    #[arg(value_name = "GIST")]
    gist: String,

    /// Files to update, relative to the input directory.
    #[arg(short = 'f', long = "file", value_name = "FILENAME", num_args = 1..)]
    filenames: Vec<String>,

    /// Attach the files as new ones.
    #[arg(short = 'n', long, conflicts_with = "remove", requires = "filenames")]
    new: bool,

    /// Remove the files from the gist.
    #[arg(short = 'r', long, requires = "filenames")]
    remove: bool,

    /// Directory the files are read from (defaults to the current one).
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// New description.
    #[arg(short = 'd', long)]
    description: Option<String>,

    #[command(flatten)]
    creds: CredentialArgs,
}

/// What to do with each named file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Overwrite an existing file with local content.
    Replace,
    /// Attach a file the gist does not have yet.
    New,
    /// Drop an existing file.
    Remove,
}

impl UpdateArgs {
    fn mode(&self) -> FileMode {
        if self.new {
            FileMode::New
        } else if self.remove {
            FileMode::Remove
        } else {
            FileMode::Replace
        }
    }

    /// Run the update command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let outcome = update(
            &client,
            &gist_id(&self.gist),
            self.description.as_deref(),
            &self.filenames,
            self.input_dir.as_deref(),
            self.mode(),
        )
        .await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Fetch the gist, apply the edits locally, then send only the changes.
///
/// Every file is checked against the current gist before anything is sent;
/// on success the locally edited gist is returned.
pub async fn update(
    client: &Client,
    id: &str,
    description: Option<&str>,
    filenames: &[String],
    input_dir: Option<&Path>,
    mode: FileMode,
) -> Outcome {
    let names = unique_gist_filenames(filenames)?;
    let mut gist = gist_from(checked(Action::Update, client.get_gist(id)).await?)?;
    let mut patch = GistPatch::default();

    if let Some(description) = description {
        gist.description = Some(description.to_string());
        patch.description = Some(description.to_string());
    }

    for (filename, name) in filenames.iter().zip(names) {
        let exists = gist.file(&name).is_some();
        match (mode, exists) {
            (FileMode::Remove, false) => return Err(ActionError::RemoveMissing),
            (FileMode::Replace, false) => return Err(ActionError::UpdateMissing),
            (FileMode::New, true) => return Err(ActionError::DuplicateNew),
            (FileMode::Remove, true) => {
                gist.remove_file(&name);
                patch.files.insert(name, FileChange::Delete);
            }
            (FileMode::Replace | FileMode::New, _) => {
                let content = read_input(&input_path(input_dir, filename)).await?;
                let mut file = gist
                    .remove_file(&name)
                    .unwrap_or_else(|| GistFile::new(name.clone(), ""));
                file.size = content.len() as u64;
                file.content = Some(content.clone());
                gist.put_file(file);
                patch.files.insert(name, FileChange::Content(content));
            }
        }
    }

    debug!(id, files = patch.files.len(), "Patching gist");
    checked(Action::Update, client.update_gist(id, &patch)).await?;
    Ok(Payload::Gist(gist))
}
