//! `gists show` command.

use anyhow::Result;
use clap::Args;

use gists_api::Client;
use gists_api::model::{Gist, GistFile};

use crate::factory::Factory;
use crate::handlers::{CredentialArgs, gist_id};
use crate::outcome::{Action, ActionError, Outcome, Payload, checked, gist_from};

/// Show a gist's metadata, or the content of one of its files.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// The gist ID or URL.
    #[arg(value_name = "GIST")]
    gist: String,

    /// File to show instead of the gist metadata.
    #[arg(short = 'f', long = "file", value_name = "FILENAME")]
    filename: Option<String>,

    #[command(flatten)]
    creds: CredentialArgs,
}

impl ShowArgs {
    /// Run the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file cannot be loaded.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let auth = super::optional_auth(factory, &self.creds)?;
        let client = factory.api_client(auth)?;
        let outcome = show(&client, &gist_id(&self.gist), self.filename.as_deref()).await;
        super::print_outcome(factory, &outcome);
        Ok(())
    }
}

/// The whole gist, or the file named `filename`.
pub async fn show(client: &Client, id: &str, filename: Option<&str>) -> Outcome {
    let gist = gist_from(checked(Action::Show, client.get_gist(id)).await?)?;
    match filename {
        None => Ok(Payload::Gist(gist)),
        Some(name) => named_file(&gist, name).cloned().map(Payload::File),
    }
}

/// Look up `filename`, enumerating the alternatives when it is missing.
pub(crate) fn named_file<'a>(gist: &'a Gist, filename: &str) -> Result<&'a GistFile, ActionError> {
    gist.file(filename).ok_or_else(|| ActionError::FileNotFound {
        available: gist.filenames(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::test_helpers::{TestHarness, gist_json, mock_rest, mock_rest_get};

    fn args(gist: &str, filename: Option<&str>) -> ShowArgs {
        ShowArgs {
            gist: gist.into(),
            filename: filename.map(Into::into),
            creds: CredentialArgs::default(),
        }
    }

    #[tokio::test]
    async fn test_should_show_gist_metadata() {
        let h = TestHarness::new().await;
        let base = h.server.uri();
        mock_rest_get(&h.server, "/gists/abc", gist_json("abc", &["a.txt", "b.txt"], &base)).await;

        args("abc", None).run(&h.factory).await.unwrap();

        let out = h.stdout();
        assert!(out.contains("Gist [abc]"));
        assert!(out.contains("Description:\ttest gist"));
        assert!(out.contains("Private:\tfalse"));
        assert!(out.contains("Files:\t\t[a.txt, b.txt]"));
    }

    #[tokio::test]
    async fn test_should_show_requested_file_content() {
        let h = TestHarness::new().await;
        let base = h.server.uri();
        mock_rest_get(&h.server, "/gists/abc", gist_json("abc", &["a.txt", "b.txt"], &base)).await;

        args("https://gist.github.com/abc", Some("b.txt"))
            .run(&h.factory)
            .await
            .unwrap();

        let out = h.stdout();
        assert!(out.contains("File [b.txt]"));
        assert!(out.contains("Content:\n\ncontent of b.txt\n"));
        assert!(out.contains(&format!("Raw Url: {base}/raw/b.txt")));
    }

    #[tokio::test]
    async fn test_should_enumerate_files_when_requested_one_is_missing() {
        let h = TestHarness::new().await;
        let base = h.server.uri();
        mock_rest_get(&h.server, "/gists/abc", gist_json("abc", &["a.txt", "b.txt"], &base)).await;

        args("abc", Some("c.txt")).run(&h.factory).await.unwrap();

        assert_eq!(
            h.stdout(),
            "Error: File not found in gist. Available values are [a.txt, b.txt]\n"
        );
    }

    #[tokio::test]
    async fn test_should_report_missing_gist() {
        let h = TestHarness::new().await;
        mock_rest(&h.server, "GET", "/gists/nope", 404, json!({"message": "Not Found"})).await;

        args("nope", None).run(&h.factory).await.unwrap();

        assert_eq!(
            h.stdout(),
            "Error: Can not show gist file. Github reason: 'Not Found'\n"
        );
    }

    #[tokio::test]
    async fn test_should_show_single_file_gist_metadata_without_filename() {
        let h = TestHarness::new().await;
        let base = h.server.uri();
        mock_rest_get(&h.server, "/gists/one", gist_json("one", &["only.rs"], &base)).await;
        let client = h.factory.api_client(None).unwrap();

        let outcome = show(&client, "one", None).await.unwrap();

        let Payload::Gist(gist) = outcome else {
            panic!("expected gist payload");
        };
        assert_eq!(gist.filenames(), vec!["only.rs"]);
    }
}
