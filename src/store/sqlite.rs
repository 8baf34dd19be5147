use crate::store::{Database, DocumentKey, DocumentStore, StoreError, LISTINGS};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Document store kept in a local SQLite file.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert or replace a document. `data` must be a JSON object.
    pub fn put(&self, collection: &str, key: &DocumentKey, data: &Value) -> Result<(), StoreError> {
        if !data.is_object() {
            return Err(StoreError::Malformed(format!(
                "{collection}/{key}: document must be a JSON object"
            )));
        }

        let now = Utc::now().naive_utc();
        let body = data.to_string();

        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                insert into documents (collection, id, data, created_at, updated_at)
                values (?1, ?2, ?3, ?4, ?4)
                on conflict(collection, id) do update set
                    data = excluded.data,
                    updated_at = excluded.updated_at
                "#,
                params![collection, key.as_str(), body, now],
            )?;
            Ok(())
        })
    }

    /// Load `{ "<id>": { ...listing }, ... }` from a JSON file into `listings`.
    /// Returns how many documents were written.
    pub fn seed_from_file(&self, path: &Path) -> Result<usize, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Value = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(format!("parse {}: {e}", path.display())))?;

        let Value::Object(docs) = parsed else {
            return Err(StoreError::Malformed(
                "seed file must map listing ids to documents".into(),
            ));
        };

        let mut written = 0;
        for (id, data) in &docs {
            let key = DocumentKey::parse(id)?;
            self.put(LISTINGS, &key, data)?;
            written += 1;
        }

        tracing::info!(count = written, file = %path.display(), "seeded listings");
        Ok(written)
    }
}

impl DocumentStore for SqliteStore {
    fn get(&self, collection: &str, key: &DocumentKey) -> Result<Option<Value>, StoreError> {
        let body: Option<String> = self.db.with_conn(|conn| {
            conn.query_row(
                "select data from documents where collection = ?1 and id = ?2",
                params![collection, key.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::from)
        })?;

        body.map(|b| {
            serde_json::from_str(&b)
                .map_err(|e| StoreError::Malformed(format!("{collection}/{key}: {e}")))
        })
        .transpose()
    }
}
