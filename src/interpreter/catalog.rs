use std::path::Path;

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::types::{DbError, DbResult};

/// The schema document consumed at startup. Table order in `structure` is
/// preserved from the document and carries through to table creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub tuples_limit: usize,
    pub structure: LinkedHashMap<String, Vec<String>>,
}

/// What to do when the schema names the same table twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateTablePolicy {
    /// Keep every entry; lookups resolve to the first match.
    FirstMatch,
    /// Treat a duplicate name as a schema error.
    Reject,
}

impl Schema {

    pub fn load(path: impl AsRef<Path>) -> DbResult<Schema> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DbError::ConfigUnavailable(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> DbResult<Schema> {
        let schema: Schema = serde_json::from_str(text)
            .map_err(|e| DbError::InvalidSchema(e.to_string()))?;

        if schema.tuples_limit == 0 {
            return Err(DbError::InvalidSchema("tuples_limit must be positive".to_string()));
        }
        Ok(schema)
    }
}
