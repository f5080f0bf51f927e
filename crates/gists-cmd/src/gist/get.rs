//! `gists get` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use gists_api::Client;
use gists_api::model::GistFile;

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id, working_dir};
use crate::outcome::{Action, ActionError, Outcome, Payload, checked, gist_from};

/// Download a gist file.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// The gist ID or URL.
    #[arg(value_name = "GIST")]
    gist: String,

    /// File to download. Optional when the gist has a single file.
    #[arg(short = 'f', long = "file", value_name = "FILENAME")]
    filename: Option<String>,

    /// Directory to write the file into (defaults to the current one).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl GetArgs {
    /// Run the get command.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file cannot be loaded.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let auth = super::optional_auth(factory, &self.creds)?;
        let client = factory.api_client(auth)?;
        let dest = working_dir(self.output_dir.as_deref());
        let outcome = download(
            &client,
            &gist_id(&self.gist),
            self.filename.as_deref(),
            &dest,
        )
        .await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Download one file of a gist into `dest_dir`, replacing any existing copy.
pub async fn download(
    client: &Client,
    id: &str,
    filename: Option<&str>,
    dest_dir: &Path,
) -> Outcome {
    let gist = gist_from(checked(Action::Download, client.get_gist(id)).await?)?;
    let file: &GistFile = match filename {
        Some(name) => super::show::named_file(&gist, name)?,
        None => match gist.files().collect::<Vec<_>>().as_slice() {
            [only] => *only,
            _ => {
                return Err(ActionError::MoreFiles {
                    available: gist.filenames(),
                });
            }
        },
    };

    client
        .download(&file.raw_url, &dest_dir.join(&file.filename))
        .await
        .map_err(|err| ActionError::transport(Action::Download, err))?;

    Ok(Payload::Message(format!(
        "File '{}' downloaded successfully!",
        file.filename
    )))
}
