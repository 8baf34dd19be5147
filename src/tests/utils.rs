use crate::domain::listing::Listing;
use crate::router::AppState;
use crate::store::{DocumentKey, DocumentStore, StoreError, LISTINGS};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store that counts its reads.
#[derive(Default)]
pub struct MemoryStore {
    docs: HashMap<(String, String), Value>,
    reads: AtomicUsize,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read fails with a transport error.
    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn with_document(mut self, id: &str, data: Value) -> Self {
        self.docs.insert((LISTINGS.to_string(), id.to_string()), data);
        self
    }

    pub fn with_listing(self, id: &str, listing: &Listing) -> Self {
        let data = serde_json::to_value(listing).expect("listing serializes");
        self.with_document(id, data)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, collection: &str, key: &DocumentKey) -> Result<Option<Value>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = &self.failure {
            return Err(StoreError::Http(msg.clone()));
        }
        Ok(self
            .docs
            .get(&(collection.to_string(), key.as_str().to_string()))
            .cloned())
    }
}

pub fn app_state(store: MemoryStore) -> AppState {
    AppState {
        store: Box::new(store),
    }
}

pub fn request(method: Method, path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
