//! Provider abstraction for record data sources.
//!
//! A provider returns the raw JSON array of one collection. Decoding,
//! lenient record handling and the "log once, show empty" failure policy
//! live here so every data source behaves the same way.

mod directory;
mod memory;

pub use directory::DirectoryProvider;
pub use memory::InMemoryProvider;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::Collection;

/// Error types that can occur while fetching a collection.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// I/O error while reading data.
    Io(String),
    /// Payload is not a JSON array.
    Parse(String),
    /// The source has no data for this collection.
    Missing(Collection),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(msg) => write!(f, "I/O error: {}", msg),
            ProviderError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ProviderError::Missing(c) => write!(f, "No data for collection '{}'", c),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Read-only source of record collections.
///
/// Object-safe, used as `Box<dyn RecordProvider>`. Calls take no request
/// parameters; filtering, sorting and paging happen after retrieval.
pub trait RecordProvider {
    /// Returns the raw JSON payload of `collection`.
    fn fetch(&self, collection: Collection) -> Result<Vec<u8>, ProviderError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Fetches and decodes one collection.
///
/// Elements that are not JSON objects, or that fail to decode, are skipped
/// with a warning; the rest of the array is kept.
pub fn load<T: DeserializeOwned>(
    provider: &dyn RecordProvider,
    collection: Collection,
) -> Result<Vec<T>, ProviderError> {
    let bytes = provider.fetch(collection)?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| ProviderError::Parse(format!("{}: {}", collection, e)))?;
    let Value::Array(items) = value else {
        return Err(ProviderError::Parse(format!(
            "{}: expected a JSON array",
            collection
        )));
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                warn!(%collection, index = idx, "skipping non-object record");
                return None;
            }
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(%collection, index = idx, error = %e, "skipping malformed record");
                    None
                }
            }
        })
        .collect();

    debug!(%collection, total, loaded = records.len(), "collection loaded");
    Ok(records)
}

/// Like [`load`], but a failure is logged once and yields an empty row set.
pub fn load_or_empty<T: DeserializeOwned>(
    provider: &dyn RecordProvider,
    collection: Collection,
) -> Vec<T> {
    match load(provider, collection) {
        Ok(records) => records,
        Err(e) => {
            warn!(
                %collection,
                source = %provider.describe(),
                error = %e,
                "failed to fetch collection, showing empty table"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, Node};

    #[test]
    fn load_skips_non_objects() {
        let provider = InMemoryProvider::new().with(
            Collection::Activities,
            r#"[{"_id": "a"}, 5, null, {"_id": "b", "type": "live"}]"#,
        );
        let records: Vec<Activity> = load(&provider, Collection::Activities).unwrap();
        let ids: Vec<_> = records.iter().map(|a| a.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn load_rejects_non_array_payload() {
        let provider = InMemoryProvider::new().with(Collection::Nodes, r#"{"message": "boom"}"#);
        let result: Result<Vec<Node>, _> = load(&provider, Collection::Nodes);
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[test]
    fn load_or_empty_swallows_failures() {
        let provider = InMemoryProvider::new();
        let records: Vec<Node> = load_or_empty(&provider, Collection::Nodes);
        assert!(records.is_empty());

        let provider = InMemoryProvider::new().with(Collection::Nodes, "not json");
        let records: Vec<Node> = load_or_empty(&provider, Collection::Nodes);
        assert!(records.is_empty());
    }
}
