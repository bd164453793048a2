//! Record store construction.
//!
//! Chooses between the built-in reference data set and a JSON records file
//! named by `[data].records`, and hands the result out as a shared
//! [`RecordStore`] trait object.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use typeahead_core::models::Record;
use typeahead_core::store::memory::InMemoryStore;
use typeahead_core::store::RecordStore;

use crate::config::Config;

/// Build the record store described by `config`.
pub fn open_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    let store = match &config.data.records {
        Some(path) => {
            let records = load_records_file(path)?;
            let store = InMemoryStore::from_records(records)
                .with_context(|| format!("Invalid records file: {}", path.display()))?;
            info!(path = %path.display(), count = store.len(), "loaded records file");
            store
        }
        None => {
            let store = InMemoryStore::default();
            info!(count = store.len(), "using reference records");
            store
        }
    };

    Ok(Arc::new(store))
}

/// Read a JSON array of records from `path`.
pub fn load_records_file(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))
}
