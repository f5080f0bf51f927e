//! Factory for shared command dependencies.
//!
//! Built once in `main` and handed to every command. Tests swap in captured
//! output, an in-memory credential store, a stub prompter and a mock server.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use gists_api::http::{HttpClientOptions, build_client};
use gists_api::{Auth, Client};
use gists_core::config::FileStore;
use gists_core::iostreams::{IOStreams, TestOutput};
use gists_core::prompter::{DialoguerPrompter, Prompter, StubPrompter};
use gists_core::CredentialStore;

/// Shared dependencies for all commands.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    /// Credential store (lazily loaded).
    store: OnceLock<Mutex<Box<dyn CredentialStore>>>,

    // Test overrides
    http_override: Option<reqwest::Client>,
    api_url_override: Option<String>,
    prompter_stub: Option<Arc<StubPrompter>>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .field("api_url_override", &self.api_url_override)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Factory bound to the real terminal and `~/.gistsrc`.
    pub fn new(app_version: String) -> Self {
        Self {
            app_version,
            io: IOStreams::system(),
            store: OnceLock::new(),
            http_override: None,
            api_url_override: None,
            prompter_stub: None,
        }
    }

    /// Factory with captured output, for tests.
    pub fn test() -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();
        let factory = Self {
            app_version: "test".to_string(),
            io,
            store: OnceLock::new(),
            http_override: None,
            api_url_override: None,
            prompter_stub: None,
        };
        (factory, output)
    }

    /// Use this HTTP client instead of building one.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Send API requests to this base URL instead of GitHub.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url_override = Some(url.into());
        self
    }

    /// Use this credential store instead of loading `~/.gistsrc`.
    #[must_use]
    pub fn with_store(self, store: Box<dyn CredentialStore>) -> Self {
        let _ = self.store.set(Mutex::new(store));
        self
    }

    /// Answer prompts from a stub; returns it so tests can queue answers.
    pub fn with_stub_prompter(mut self) -> (Self, Arc<StubPrompter>) {
        let stub = Arc::new(StubPrompter::default());
        self.prompter_stub = Some(stub.clone());
        (self, stub)
    }

    /// Lock the credential store, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file exists but cannot be read.
    pub fn credentials(&self) -> anyhow::Result<MutexGuard<'_, Box<dyn CredentialStore>>> {
        if self.store.get().is_none() {
            let loaded: Box<dyn CredentialStore> = Box::new(FileStore::load()?);
            let _ = self.store.set(Mutex::new(loaded));
        }
        let store = self
            .store
            .get()
            .ok_or_else(|| anyhow::anyhow!("failed to initialize credential store"))?;
        Ok(store.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Prompter for interactive questions.
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if let Some(ref stub) = self.prompter_stub {
            return Box::new(StubPrompterWrapper(stub.clone()));
        }
        Box::new(DialoguerPrompter)
    }

    /// API client carrying `auth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn api_client(&self, auth: Option<Auth>) -> anyhow::Result<Client> {
        let http = match self.http_override {
            Some(ref client) => client.clone(),
            None => build_client(&HttpClientOptions {
                app_version: self.app_version.clone(),
            })?,
        };

        let client = Client::new(http, auth);
        Ok(match self.api_url_override {
            Some(ref url) => client.with_base_url(url)?,
            None => client,
        })
    }
}

/// Wrapper to use `Arc<StubPrompter>` as `Box<dyn Prompter>`.
#[derive(Debug)]
struct StubPrompterWrapper(Arc<StubPrompter>);

impl Prompter for StubPrompterWrapper {
    fn input(&self, prompt: &str) -> anyhow::Result<String> {
        self.0.input(prompt)
    }

    fn password(&self, prompt: &str) -> anyhow::Result<String> {
        self.0.password(prompt)
    }
}
