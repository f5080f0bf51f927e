//! Shared test utilities for command testing.

use std::sync::Arc;

use gists_core::config::MemoryStore;
use gists_core::iostreams::TestOutput;
use gists_core::prompter::StubPrompter;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// Token stored in the default harness credentials.
pub const TEST_TOKEN: &str = "ghp_test_token_123";

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
    /// Stub prompter for providing test answers.
    pub prompter: Arc<StubPrompter>,
}

impl TestHarness {
    /// Harness whose store holds user `testuser` and [`TEST_TOKEN`].
    pub async fn new() -> Self {
        Self::with_store(MemoryStore::new().with_user("testuser").with_token(TEST_TOKEN)).await
    }

    /// Harness with a custom credential store.
    pub async fn with_store(store: MemoryStore) -> Self {
        let server = MockServer::start().await;
        let (factory, output) = Factory::test();
        let (factory, prompter) = factory.with_stub_prompter();
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_api_url(format!("{}/", server.uri()))
            .with_store(Box::new(store));

        Self {
            factory,
            output,
            server,
            prompter,
        }
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }
}

/// Gist JSON with the given files, each holding `content of <name>`.
pub fn gist_json(id: &str, files: &[&str], raw_base: &str) -> Value {
    let files: serde_json::Map<String, Value> = files
        .iter()
        .map(|name| {
            let content = format!("content of {name}");
            (
                (*name).to_string(),
                json!({
                    "filename": name,
                    "type": "text/plain",
                    "language": "Text",
                    "raw_url": format!("{raw_base}/raw/{name}"),
                    "size": content.len(),
                    "content": content,
                }),
            )
        })
        .collect();
    json!({
        "id": id,
        "description": "test gist",
        "url": format!("https://api.github.com/gists/{id}"),
        "html_url": format!("https://gist.github.com/{id}"),
        "public": true,
        "owner": {"login": "testuser"},
        "files": files,
    })
}

// --- Wiremock helpers ---

/// Mount a REST response mock for `verb` on `url_path`.
pub async fn mock_rest(
    server: &MockServer,
    verb: &str,
    url_path: &str,
    status: u16,
    response_body: Value,
) {
    Mock::given(method(verb))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a REST GET response mock for a specific path.
pub async fn mock_rest_get(server: &MockServer, url_path: &str, response_body: Value) {
    mock_rest(server, "GET", url_path, 200, response_body).await;
}

/// Mount a mock that fails the test if `verb` on `url_path` is ever called.
pub async fn mock_never_called(server: &MockServer, verb: &str, url_path: &str) {
    Mock::given(method(verb))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Mount a mock that must be called exactly once.
pub async fn mock_called_once(
    server: &MockServer,
    verb: &str,
    url_path: &str,
    status: u16,
    response_body: Value,
) {
    Mock::given(method(verb))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a bodiless `204 No Content` reply that must be called exactly once.
pub async fn mock_no_content_once(server: &MockServer, verb: &str, url_path: &str) {
    Mock::given(method(verb))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

/// Serve raw file content under `/raw/<filename>`.
pub async fn mock_raw_file(server: &MockServer, filename: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/raw/{filename}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(server)
        .await;
}
