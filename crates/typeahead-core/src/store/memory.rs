//! In-memory [`RecordStore`] implementation.
//!
//! The record set is fixed at construction and never mutated, so the store
//! needs no locking. It also carries the fifteen-entry reference data set
//! used when no records file is configured.

use std::collections::HashSet;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::models::Record;

use super::RecordStore;

/// The reference data set as `(id, name, contact)`.
pub const REFERENCE_RECORDS: [(i64, &str, &str); 15] = [
    (1, "Isaac Newton", "newton@math.com"),
    (2, "Leonhard Euler", "euler@math.com"),
    (3, "Carl Friedrich Gauss", "gauss@math.com"),
    (4, "Alan Turing", "turing@math.com"),
    (5, "Emmy Noether", "noether@math.com"),
    (6, "Pythagoras", "pythagoras@math.com"),
    (7, "Euclid", "euclid@math.com"),
    (8, "Archimedes", "archimedes@math.com"),
    (9, "Bernhard Riemann", "riemann@math.com"),
    (10, "Pierre de Fermat", "fermat@math.com"),
    (11, "Sophie Germain", "germain@math.com"),
    (12, "Ada Lovelace", "lovelace@math.com"),
    (13, "David Hilbert", "hilbert@math.com"),
    (14, "Henri Poincaré", "poincare@math.com"),
    (15, "John von Neumann", "neumann@math.com"),
];

/// Build the reference records in their canonical order.
pub fn reference_records() -> Vec<Record> {
    REFERENCE_RECORDS
        .iter()
        .map(|(id, name, contact)| Record::new(*id, *name, *contact))
        .collect()
}

/// Immutable in-memory record store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    /// Store backed by the reference data set.
    pub fn reference() -> Self {
        Self {
            records: reference_records(),
        }
    }

    /// Store backed by `records`, kept in the given order.
    ///
    /// Fails if two records share an id.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                bail!("duplicate record id: {}", r.id);
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Defaults to the reference data set.
impl Default for InMemoryStore {
    fn default() -> Self {
        Self::reference()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_all_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}
