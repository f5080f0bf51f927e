//! `gists fork` command.

use anyhow::Result;
use clap::Args;

use gists_api::Client;

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id};
use crate::outcome::{Action, Outcome, Payload, checked, gist_from};

/// Fork a gist into your account.
#[derive(Debug, Args)]
pub struct ForkArgs {
    /// The gist ID or URL to fork.
    #[arg(value_name = "GIST")]
    gist: String,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl ForkArgs {
    /// Run the fork command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let outcome = fork(&client, &gist_id(&self.gist)).await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Fork gist `id`, reporting the identifier of the copy.
pub async fn fork(client: &Client, id: &str) -> Outcome {
    let forked = gist_from(checked(Action::Fork, client.fork_gist(id)).await?)?;
    Ok(Payload::Message(format!(
        "Gist '{id}' forked as '{}'",
        forked.id
    )))
}
