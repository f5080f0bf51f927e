//! `gists authorize` command.
//!
//! Trades the account password for a personal access token scoped to gists
//! and stores it, so later commands no longer need the password.

use anyhow::Result;
use clap::Args;
use tracing::info;

use gists_api::model::{Authorization, AuthorizationRequest};
use gists_api::{Auth, Client};
use gists_core::ConfigError;

use crate::factory::Factory;
use crate::handlers::CredentialArgs;
use crate::outcome::{Action, ActionError, Payload, checked};

/// Label of the authorization this program creates and reuses.
pub const APP_NAME: &str = "Gists CLI";

/// Homepage attached to the authorization.
pub const APP_URL: &str = "https://github.com/jdevesa/gists";

/// Obtain a personal access token and store it.
#[derive(Debug, Args)]
pub struct AuthorizeArgs {
    #[command(flatten)]
    creds: CredentialArgs,
}

impl AuthorizeArgs {
    /// Run the authorize command.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or the password cannot be resolved, or
    /// if the token cannot be written to the credentials file.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let (user, password) = {
            let store = factory.credentials()?;
            let user = self.creds.resolve_user(&**store)?;
            let password = self
                .creds
                .password
                .clone()
                .filter(|p| !p.trim().is_empty())
                .or_else(|| store.password());
            (user, password)
        };
        let password = match password {
            Some(password) => password,
            None if factory.io.can_prompt() => factory
                .prompter()
                .password(&format!("GitHub password for '{user}'"))?,
            None => String::new(),
        };
        if password.is_empty() {
            return Err(ConfigError::MissingCredential.into());
        }

        let client = factory.api_client(Some(Auth::basic(&user, password)))?;
        let outcome = match obtain_token(&client).await {
            Ok(token) => {
                let mut store = factory.credentials()?;
                store.set_user(&user);
                store.set_token(&token);
                store.write()?;
                info!(location = %store.location(), "Stored token");
                Ok(Payload::Message(format!(
                    "Token stored in '{}'",
                    store.location()
                )))
            }
            Err(err) => Err(err),
        };
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// Token of this program's existing authorization, or of a new one.
pub async fn obtain_token(client: &Client) -> Result<String, ActionError> {
    let resp = checked(Action::Authorize, client.list_authorizations()).await?;
    let existing: Vec<Authorization> =
        serde_json::from_value(resp.into_body()).map_err(|err| ActionError::malformed(&err))?;
    if let Some(found) = existing
        .into_iter()
        .find(|a| a.note.as_deref() == Some(APP_NAME) && !a.token.is_empty())
    {
        return Ok(found.token);
    }

    let request = AuthorizationRequest {
        note: APP_NAME.to_string(),
        note_url: APP_URL.to_string(),
        scopes: vec!["gist".to_string()],
    };
    let resp = checked(Action::Authorize, client.create_authorization(&request)).await?;
    let created: Authorization =
        serde_json::from_value(resp.into_body()).map_err(|err| ActionError::malformed(&err))?;
    Ok(created.token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gists_core::config::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::test_helpers::{TestHarness, mock_never_called, mock_rest, mock_rest_get};

    fn args(password: Option<&str>) -> AuthorizeArgs {
        AuthorizeArgs {
            creds: CredentialArgs {
                password: password.map(Into::into),
                ..CredentialArgs::default()
            },
        }
    }

    #[tokio::test]
    async fn test_should_reuse_existing_authorization() {
        let h = TestHarness::with_store(MemoryStore::new().with_user("testuser")).await;
        mock_rest_get(
            &h.server,
            "/authorizations",
            json!([
                {"note": "other tool", "token": "nope", "scopes": ["repo"]},
                {"note": "Gists CLI", "token": "reused-token", "scopes": ["gist"]}
            ]),
        )
        .await;
        mock_never_called(&h.server, "POST", "/authorizations").await;

        args(Some("s3cret")).run(&h.factory).await.unwrap();

        assert_eq!(h.stdout(), "Token stored in 'memory'\n");
        let store = h.factory.credentials().unwrap();
        assert_eq!(store.token().as_deref(), Some("reused-token"));
        assert!(h.prompter.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_should_create_authorization_with_prompted_password() {
        let mut h = TestHarness::with_store(MemoryStore::new().with_user("testuser")).await;
        h.factory.io.set_stdin_tty(true);
        h.factory.io.set_stdout_tty(true);
        h.prompter.push_answer("pw");
        Mock::given(method("GET"))
            .and(path("/authorizations"))
            .and(basic_auth("testuser", "pw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/authorizations"))
            .and(body_json(json!({
                "note": "Gists CLI",
                "note_url": "https://github.com/jdevesa/gists",
                "scopes": ["gist"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "note": "Gists CLI",
                "scopes": ["gist"],
                "token": "fresh-token"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        args(None).run(&h.factory).await.unwrap();

        assert_eq!(h.prompter.prompts(), vec!["GitHub password for 'testuser'"]);
        let store = h.factory.credentials().unwrap();
        assert_eq!(store.user().as_deref(), Some("testuser"));
        assert_eq!(store.token().as_deref(), Some("fresh-token"));
    }

    #[tokio::test]
    async fn test_should_surface_rejected_credentials() {
        let h = TestHarness::with_store(MemoryStore::new().with_user("testuser")).await;
        mock_rest(
            &h.server,
            "GET",
            "/authorizations",
            401,
            json!({"message": "Bad credentials"}),
        )
        .await;

        args(Some("wrong")).run(&h.factory).await.unwrap();

        assert_eq!(
            h.stdout(),
            "Error: Could not get an authorization token. Github reason: 'Bad credentials'\n"
        );
        assert!(h.factory.credentials().unwrap().token().is_none());
    }

    #[tokio::test]
    async fn test_should_abort_without_password_off_terminal() {
        let h = TestHarness::with_store(MemoryStore::new().with_user("testuser")).await;
        mock_never_called(&h.server, "GET", "/authorizations").await;

        let err = args(None).run(&h.factory).await.unwrap_err();

        assert!(h.prompter.prompts().is_empty());
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingCredential)
        ));
    }
}
