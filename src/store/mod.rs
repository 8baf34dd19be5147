//! Point-read access to the document store that holds listings.
//!
//! The view only ever needs `get(collection, key)`, so that is all the
//! trait exposes. Writes (seeding) live on the concrete stores.

pub mod connection;
pub mod firestore;
pub mod sqlite;

pub use connection::Database;
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use sqlite::SqliteStore;

use crate::domain::listing::Listing;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

pub const LISTINGS: &str = "listings";

const MAX_KEY_BYTES: usize = 1500;

// Same set `url` escapes in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(String),
    #[error("Request failed: {0}")]
    Http(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed document: {0}")]
    Malformed(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Db(e.to_string())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Http(e.to_string())
    }
}

/// A document key the store's ID scheme accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        if raw.is_empty() {
            return Err(StoreError::InvalidKey("key is empty".into()));
        }
        if raw.len() > MAX_KEY_BYTES {
            return Err(StoreError::InvalidKey(format!(
                "key is longer than {MAX_KEY_BYTES} bytes"
            )));
        }
        if raw.contains('/') {
            return Err(StoreError::InvalidKey(format!("'{raw}' contains '/'")));
        }
        if raw == "." || raw == ".." {
            return Err(StoreError::InvalidKey(format!("'{raw}' is reserved")));
        }
        if raw.len() >= 4 && raw.starts_with("__") && raw.ends_with("__") {
            return Err(StoreError::InvalidKey(format!("'{raw}' is reserved")));
        }
        Ok(Self(raw.to_string()))
    }

    /// Parse a percent-encoded URL path segment.
    pub fn from_path_segment(segment: &str) -> Result<Self, StoreError> {
        let decoded = percent_decode_str(segment)
            .decode_utf8()
            .map_err(|_| StoreError::InvalidKey(format!("'{segment}' is not valid UTF-8")))?;
        Self::parse(&decoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key escaped for use as one URL path segment.
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait DocumentStore: Send + Sync {
    /// Returns the document's data, or `None` when the key does not exist.
    fn get(&self, collection: &str, key: &DocumentKey) -> Result<Option<Value>, StoreError>;
}

/// Reads one listing and decodes it.
pub fn get_listing<S>(store: &S, key: &DocumentKey) -> Result<Option<Listing>, StoreError>
where
    S: DocumentStore + ?Sized,
{
    let Some(data) = store.get(LISTINGS, key)? else {
        return Ok(None);
    };

    serde_json::from_value(data)
        .map(Some)
        .map_err(|e| StoreError::Malformed(format!("listing {key}: {e}")))
}
