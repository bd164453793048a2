//! # Typeahead Core
//!
//! I/O-free logic for Typeahead: the record model, the [`store::RecordStore`]
//! capability with its in-memory implementation, and the query filter that
//! backs the search-as-you-type endpoint.
//!
//! This crate contains no HTTP, templating, or filesystem code. The
//! application crate wires these pieces to axum and askama.

pub mod filter;
pub mod models;
pub mod store;
