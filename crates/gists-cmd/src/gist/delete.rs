//! `gists delete` command.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use gists_api::Client;
use gists_core::prompter::Prompter;

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id};
use crate::outcome::{Action, ActionError, Outcome, Payload, checked};

/// Answers that confirm a deletion, compared case-insensitively.
const AFFIRMATIVE: &[&str] = &["y", "yes", "ye", "ofcourse"];

/// Delete a gist.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The gist ID or URL to delete.
    #[arg(value_name = "GIST")]
    gist: String,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl DeleteArgs {
    /// Run the delete command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let prompter = factory.prompter();
        let outcome = delete(&client, &gist_id(&self.gist), prompter.as_ref()).await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Delete a gist once it is known to exist and the user confirms.
pub async fn delete(client: &Client, id: &str, prompter: &dyn Prompter) -> Outcome {
    checked(Action::Delete, client.get_gist(id)).await?;

    let answer = prompter
        .input(&format!("Are you sure you want to delete gist {id} [yN]"))
        .unwrap_or_else(|err| {
            warn!(error = %err, "Confirmation prompt failed");
            String::new()
        });
    if !is_affirmative(&answer) {
        return Err(ActionError::DeleteAborted);
    }

    checked(Action::Delete, client.delete_gist(id)).await?;
    Ok(Payload::Message(format!("Gist '{id}' deleted succesfully")))
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}
