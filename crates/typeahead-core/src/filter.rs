//! Query filter for the search-as-you-type endpoint.
//!
//! The filter is a pure function over a record slice. It never touches a
//! store or configuration directly: callers list records from a
//! [`RecordStore`](crate::store::RecordStore), build [`FilterParams`], and
//! pass both in.
//!
//! # Algorithm
//!
//! 1. If the query has fewer than `min_query_chars` user-perceived
//!    characters (extended grapheme clusters), return no matches and flag
//!    the result as too short.
//! 2. Otherwise keep every record whose folded `name` or `contact`
//!    contains the folded query, in data-set order. Folding lowercases and
//!    then normalizes to NFC, so canonically equivalent spellings match.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::Record;

/// Minimum query length, in grapheme clusters, before any filtering happens.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Filter tuning parameters, decoupled from application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    /// Queries shorter than this (in grapheme clusters) are reported as too short.
    pub min_query_chars: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

/// Output of a single filter invocation.
///
/// Serializes as `{"matches": [...], "query": "...", "queryTooShort": bool}`,
/// which is also the shape the results fragment template reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Matching records in data-set order.
    pub matches: Vec<Record>,
    /// The query exactly as received.
    pub query: String,
    pub query_too_short: bool,
}

impl QueryResult {
    fn too_short(query: &str) -> Self {
        Self {
            matches: Vec::new(),
            query: query.to_string(),
            query_too_short: true,
        }
    }
}

/// Filter `records` by `query` using the default parameters.
pub fn filter(query: &str, records: &[Record]) -> QueryResult {
    filter_with(&FilterParams::default(), query, records)
}

/// Filter `records` by `query`.
///
/// Matching is a case-insensitive, unanchored substring test against both
/// `name` and `contact`. The input slice is never reordered.
pub fn filter_with(params: &FilterParams, query: &str, records: &[Record]) -> QueryResult {
    if query.graphemes(true).count() < params.min_query_chars {
        return QueryResult::too_short(query);
    }

    let needle = fold(query);
    let matches = records
        .iter()
        .filter(|r| record_matches(r, &needle))
        .cloned()
        .collect();

    QueryResult {
        matches,
        query: query.to_string(),
        query_too_short: false,
    }
}

fn record_matches(record: &Record, needle: &str) -> bool {
    fold(&record.name).contains(needle) || fold(&record.contact).contains(needle)
}

/// Lowercase, then compose to NFC.
fn fold(s: &str) -> String {
    s.to_lowercase().nfc().collect()
}
