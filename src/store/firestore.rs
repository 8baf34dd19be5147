// store/firestore.rs
use crate::store::{DocumentKey, DocumentStore, StoreError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com";

#[derive(Clone, Debug)]
pub struct FirestoreConfig {
    pub endpoint: Url,
    pub project_id: String,
    pub api_key: Option<String>,
}

/// Read-only client for the Firestore REST API.
pub struct FirestoreStore {
    config: FirestoreConfig,
    client: Client,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { config, client })
    }

    fn document_url(&self, collection: &str, key: &DocumentKey) -> Result<Url, StoreError> {
        let mut url = self.config.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Http(format!("bad endpoint {}", self.config.endpoint)))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.config.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                collection,
                key.as_str(),
            ]);
        Ok(url)
    }
}

impl DocumentStore for FirestoreStore {
    fn get(&self, collection: &str, key: &DocumentKey) -> Result<Option<Value>, StoreError> {
        let mut req = self.client.get(self.document_url(collection, key)?);
        if let Some(api_key) = &self.config.api_key {
            req = req.query(&[("key", api_key)]);
        }

        let resp = req.send()?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%collection, %key, "firestore document missing");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let doc: RawDocument = resp
            .json()
            .map_err(|e| StoreError::Malformed(format!("{collection}/{key}: {e}")))?;

        decode_fields(&doc.fields).map(Some)
    }
}

/// Flatten a Firestore `fields` map into a plain JSON object.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Value, StoreError> {
    let mut out = Map::with_capacity(fields.len());
    for (name, typed) in fields {
        out.insert(name.clone(), decode_value(typed)?);
    }
    Ok(Value::Object(out))
}

fn decode_value(typed: &Value) -> Result<Value, StoreError> {
    let Some((kind, inner)) = typed.as_object().and_then(|o| o.iter().next()) else {
        return Err(StoreError::Malformed(format!("untyped value: {typed}")));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => Ok(inner.clone()),
        // The REST API encodes int64 as a decimal string.
        "integerValue" => {
            let n = match inner {
                Value::String(s) => s
                    .parse::<i64>()
                    .map_err(|e| StoreError::Malformed(format!("integerValue {s:?}: {e}")))?,
                Value::Number(n) => n
                    .as_i64()
                    .ok_or_else(|| StoreError::Malformed(format!("integerValue {n}")))?,
                other => return Err(StoreError::Malformed(format!("integerValue {other}"))),
            };
            Ok(Value::Number(n.into()))
        }
        "doubleValue" => {
            let f = match inner {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.parse::<f64>().ok(),
                _ => None,
            };
            f.and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| StoreError::Malformed(format!("doubleValue {inner}")))
        }
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields),
            None => Ok(Value::Object(Map::new())),
        },
        "geoPointValue" => Ok(inner.clone()),
        other => Err(StoreError::Malformed(format!("unknown value type {other}"))),
    }
}
