//! In-memory provider, used by tests and demos.

use std::collections::HashMap;

use crate::model::Collection;

use super::{ProviderError, RecordProvider};

#[derive(Debug, Default, Clone)]
pub struct InMemoryProvider {
    payloads: HashMap<Collection, String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the JSON payload served for `collection`.
    pub fn with(mut self, collection: Collection, json: impl Into<String>) -> Self {
        self.payloads.insert(collection, json.into());
        self
    }
}

impl RecordProvider for InMemoryProvider {
    fn fetch(&self, collection: Collection) -> Result<Vec<u8>, ProviderError> {
        self.payloads
            .get(&collection)
            .map(|s| s.as_bytes().to_vec())
            .ok_or(ProviderError::Missing(collection))
    }

    fn describe(&self) -> String {
        format!("memory ({} collections)", self.payloads.len())
    }
}
