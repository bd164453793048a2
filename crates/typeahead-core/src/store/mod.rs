//! Record storage abstraction.
//!
//! The [`RecordStore`] trait is the only way the application reaches the
//! record set, so a real data store can replace the in-memory one without
//! changing the filter contract.
//!
//! Implementations must be `Send + Sync` to be shared across request
//! handlers.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Record;

/// Read-only source of records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return every record, in data-set order.
    async fn list_all_records(&self) -> Result<Vec<Record>>;
}
