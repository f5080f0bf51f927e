//! Gist data model and request payloads.
//!
//! Read-side types deserialize from GitHub responses. Write-side types
//! ([`NewGist`], [`GistPatch`], [`AuthorizationRequest`]) serialize into the
//! JSON bodies the API expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A GitHub gist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gist {
    /// Gist identifier.
    pub id: String,
    /// Free-form description; GitHub sends `null` when unset.
    #[serde(default)]
    pub description: Option<String>,
    /// API URL of the gist.
    #[serde(default)]
    pub url: String,
    /// Browser URL of the gist.
    #[serde(default)]
    pub html_url: String,
    /// Owning account, absent for anonymous gists.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Whether the gist is public.
    #[serde(default)]
    pub public: bool,
    /// Files keyed by file name.
    #[serde(default)]
    files: BTreeMap<String, GistFile>,
}

/// Account that owns a gist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    /// Account login.
    pub login: String,
}

/// One file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GistFile {
    /// File name, unique within its gist.
    #[serde(default)]
    pub filename: String,
    /// File content. Absent in list responses.
    #[serde(default)]
    pub content: Option<String>,
    /// Language detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// URL of the raw file content.
    #[serde(default)]
    pub raw_url: String,
    /// MIME type.
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

impl GistFile {
    /// A local file about to be uploaded.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            filename: filename.into(),
            size: content.len() as u64,
            content: Some(content),
            ..Self::default()
        }
    }
}

impl Gist {
    /// Build a gist from a GitHub JSON object.
    ///
    /// Each file's `filename` is set to its key in the `files` map.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a gist object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let mut gist: Self = serde_json::from_value(value)?;
        for (name, file) in &mut gist.files {
            file.filename.clone_from(name);
        }
        Ok(gist)
    }

    /// Build a list of gists from a GitHub JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an array of gist objects.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, serde_json::Error> {
        let items: Vec<Value> = serde_json::from_value(value)?;
        items.into_iter().map(Self::from_value).collect()
    }

    /// Description, or the empty string when unset.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Look up a file by name.
    pub fn file(&self, filename: &str) -> Option<&GistFile> {
        self.files.get(filename)
    }

    /// All files, ordered by name.
    pub fn files(&self) -> impl Iterator<Item = &GistFile> {
        self.files.values()
    }

    /// Number of files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// File names, ordered.
    pub fn filenames(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    /// Insert or replace a file, keyed by its own name.
    pub fn put_file(&mut self, file: GistFile) {
        self.files.insert(file.filename.clone(), file);
    }

    /// Drop a file, returning it if it was present.
    pub fn remove_file(&mut self, filename: &str) -> Option<GistFile> {
        self.files.remove(filename)
    }
}

/// Body of a create-gist request.
#[derive(Debug, Clone, Serialize)]
pub struct NewGist {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    public: bool,
    files: BTreeMap<String, FileContent>,
}

#[derive(Debug, Clone, Serialize)]
struct FileContent {
    content: String,
}

impl NewGist {
    /// Start a new gist payload.
    pub fn new(description: Option<String>, public: bool) -> Self {
        Self {
            description,
            public,
            files: BTreeMap::new(),
        }
    }

    /// Attach a file.
    pub fn add_file(&mut self, filename: impl Into<String>, content: impl Into<String>) {
        self.files.insert(
            filename.into(),
            FileContent {
                content: content.into(),
            },
        );
    }
}

/// Change to one file in an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// Set the file content, creating the file if needed.
    Content(String),
    /// Delete the file. Serialized as JSON `null`.
    Delete,
}

impl Serialize for FileChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Content(content) => FileContent {
                content: content.clone(),
            }
            .serialize(serializer),
            Self::Delete => serializer.serialize_none(),
        }
    }
}

/// Body of an update-gist request. Only the listed fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GistPatch {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-file changes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, FileChange>,
}

/// A personal access token grant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Authorization {
    /// Label of the grant.
    #[serde(default)]
    pub note: Option<String>,
    /// URL associated with the grant.
    #[serde(default)]
    pub note_url: Option<String>,
    /// Granted scopes.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// The token itself.
    #[serde(default)]
    pub token: String,
}

/// Body of a create-authorization request.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationRequest {
    /// Label of the grant.
    pub note: String,
    /// URL associated with the grant.
    pub note_url: String,
    /// Requested scopes.
    pub scopes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "aa5a315d61ae9438b18d",
            "description": "Hello World Examples",
            "url": "https://api.github.com/gists/aa5a315d61ae9438b18d",
            "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
            "public": true,
            "owner": {"login": "octocat"},
            "files": {
                "hello_world.rb": {
                    "filename": "hello_world.rb",
                    "type": "application/x-ruby",
                    "language": "Ruby",
                    "raw_url": "https://gist.githubusercontent.com/raw/hello_world.rb",
                    "size": 167,
                    "content": "puts 'hi'"
                },
                "hello_world.py": {
                    "type": "application/x-python",
                    "language": null,
                    "raw_url": "https://gist.githubusercontent.com/raw/hello_world.py",
                    "size": 12
                }
            }
        })
    }

    #[test]
    fn test_should_parse_gist_response() {
        let gist = Gist::from_value(sample()).unwrap();
        assert_eq!(gist.id, "aa5a315d61ae9438b18d");
        assert_eq!(gist.description_or_empty(), "Hello World Examples");
        assert_eq!(gist.owner.as_ref().map(|o| o.login.as_str()), Some("octocat"));
        assert!(gist.public);
        assert_eq!(gist.filenames(), vec!["hello_world.py", "hello_world.rb"]);

        let rb = gist.file("hello_world.rb").unwrap();
        assert_eq!(rb.language.as_deref(), Some("Ruby"));
        assert_eq!(rb.mime_type.as_deref(), Some("application/x-ruby"));
        assert_eq!(rb.size, 167);
        assert_eq!(rb.content.as_deref(), Some("puts 'hi'"));
    }

    #[test]
    fn test_should_key_filename_by_map_entry() {
        let gist = Gist::from_value(sample()).unwrap();
        let py = gist.file("hello_world.py").unwrap();
        assert_eq!(py.filename, "hello_world.py");
        assert!(py.language.is_none());
        assert!(py.content.is_none());
    }

    #[test]
    fn test_should_accept_null_description_and_missing_owner() {
        let gist = Gist::from_value(json!({"id": "1", "description": null, "files": {}})).unwrap();
        assert_eq!(gist.description_or_empty(), "");
        assert!(gist.owner.is_none());
        assert_eq!(gist.file_count(), 0);
    }

    #[test]
    fn test_should_parse_gist_list() {
        let list = Gist::list_from_value(json!([sample(), {"id": "2"}])).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "2");
    }

    #[test]
    fn test_should_reject_non_gist_value() {
        assert!(Gist::from_value(json!("nope")).is_err());
        assert!(Gist::list_from_value(json!({"message": "Not Found"})).is_err());
    }

    #[test]
    fn test_should_put_and_remove_files() {
        let mut gist = Gist::from_value(json!({"id": "1"})).unwrap();
        gist.put_file(GistFile::new("a.txt", "abc"));
        assert_eq!(gist.file("a.txt").unwrap().size, 3);
        gist.put_file(GistFile::new("a.txt", "abcd"));
        assert_eq!(gist.file_count(), 1);
        assert!(gist.remove_file("a.txt").is_some());
        assert!(gist.remove_file("a.txt").is_none());
    }

    #[test]
    fn test_should_serialize_new_gist_without_description() {
        let mut payload = NewGist::new(None, true);
        payload.add_file("x.py", "print(1)");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"public": true, "files": {"x.py": {"content": "print(1)"}}})
        );
    }

    #[test]
    fn test_should_serialize_patch_with_explicit_null_for_deletes() {
        let mut patch = GistPatch {
            description: Some("new desc".to_string()),
            ..GistPatch::default()
        };
        patch
            .files
            .insert("a.txt".to_string(), FileChange::Content("A".to_string()));
        patch.files.insert("b.txt".to_string(), FileChange::Delete);

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({
                "description": "new desc",
                "files": {"a.txt": {"content": "A"}, "b.txt": null}
            })
        );
    }

    #[test]
    fn test_should_serialize_empty_patch_as_empty_object() {
        assert_eq!(
            serde_json::to_value(GistPatch::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_should_parse_authorization() {
        let auth: Authorization = serde_json::from_value(json!({
            "id": 1,
            "note": "Gists CLI",
            "note_url": "https://github.com/jdevesa/gists",
            "scopes": ["gist"],
            "token": "abc123"
        }))
        .unwrap();
        assert_eq!(auth.note.as_deref(), Some("Gists CLI"));
        assert_eq!(auth.scopes, vec!["gist"]);
        assert_eq!(auth.token, "abc123");
    }
}
