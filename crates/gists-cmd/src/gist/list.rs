//! `gists list` command.

use anyhow::Result;
use clap::Args;

use gists_api::Client;
use gists_api::model::Gist;
use gists_core::ConfigError;

use crate::factory::Factory;
use crate::handlers::CredentialArgs;
use crate::outcome::{Action, ActionError, Outcome, Payload, checked};

/// List a user's gists.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    creds: CredentialArgs,

    /// Include private gists (requires a credential).
    #[arg(short = 'p', long, conflicts_with = "starred")]
    private: bool,

    /// List starred gists instead (requires a credential).
    #[arg(short = 's', long)]
    starred: bool,
}

impl ListArgs {
    /// Run the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user, or a credential required by `--private`
    /// or `--starred`, cannot be resolved. `--starred` needs no user name
    /// when a token is available.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let outcome = if self.starred {
            let auth = {
                let store = factory.credentials()?;
                self.creds.optional_auth(&**store)
            }
            .ok_or(ConfigError::MissingCredential)?;
            list_starred(&factory.api_client(Some(auth))?).await
        } else {
            let (user, auth) = if self.private {
                let (user, auth) = super::authenticated(factory, &self.creds)?;
                (user, Some(auth))
            } else {
                let user = self.creds.resolve_user(&**factory.credentials()?)?;
                (user, super::optional_auth(factory, &self.creds)?)
            };
            list_gists(&factory.api_client(auth)?, &user).await
        };
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Gists owned by `user`. Private ones are included when the client is
/// authenticated as that user.
pub async fn list_gists(client: &Client, user: &str) -> Outcome {
    let resp = checked(Action::List, client.list_gists(user)).await?;
    into_list(resp.into_body())
}

/// Gists starred by the authenticated user.
pub async fn list_starred(client: &Client) -> Outcome {
    let resp = checked(Action::List, client.list_starred_gists()).await?;
    into_list(resp.into_body())
}

fn into_list(body: serde_json::Value) -> Outcome {
    Gist::list_from_value(body)
        .map(Payload::Gists)
        .map_err(|err| ActionError::malformed(&err))
}
