//! `gists star` and `gists unstar` commands.

use anyhow::Result;
use clap::Args;

use gists_api::Client;

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id};
use crate::outcome::{Action, Outcome, Payload, checked};

/// Star a gist.
#[derive(Debug, Args)]
pub struct StarArgs {
    /// The gist ID or URL to star.
    #[arg(value_name = "GIST")]
    gist: String,

    #[command(flatten)]
    creds: CredentialArgs,
}

/// Remove the star from a gist.
#[derive(Debug, Args)]
pub struct UnstarArgs {
    /// The gist ID or URL to unstar.
    #[arg(value_name = "GIST")]
    gist: String,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl StarArgs {
    /// Run the star command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let outcome = star(&client, &gist_id(&self.gist)).await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

impl UnstarArgs {
    /// Run the unstar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the credential cannot be resolved.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (_, auth) = super::authenticated(factory, &self.creds)?;
        let client = factory.api_client(Some(auth))?;
        let outcome = unstar(&client, &gist_id(&self.gist)).await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Star gist `id`.
pub async fn star(client: &Client, id: &str) -> Outcome {
    checked(Action::Star, client.star_gist(id)).await?;
    Ok(Payload::Message(format!("Gist '{id}' starred")))
}

/// Unstar gist `id`.
pub async fn unstar(client: &Client, id: &str) -> Outcome {
    checked(Action::Unstar, client.unstar_gist(id)).await?;
    Ok(Payload::Message(format!("Gist '{id}' unstarred")))
}
