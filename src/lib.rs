//! # Typeahead
//!
//! A server-rendered search-as-you-type endpoint over a fixed record set.
//!
//! The browser loads a page with a search box; every keystroke (debounced)
//! issues `GET /search?q=…`, and the server answers with an HTML fragment
//! listing the records whose name or contact contains the query.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌─────────────┐   ┌──────────┐
//! │  Browser │──▶│  HTTP (axum) │──▶│ QueryFilter │──▶│  askama  │
//! │  (htmx)  │◀──│  /search     │   │  (core)     │   │ fragment │
//! └──────────┘   └──────┬───────┘   └─────────────┘   └──────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │ RecordStore │
//!                │ (in-memory) │
//!                └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! typeahead serve                 # start HTTP server on 127.0.0.1:8080
//! typeahead search euler          # filter from the terminal
//! typeahead records               # list the record set
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`data`] | Record store construction |
//! | [`logging`] | Tracing subscriber setup |
//! | [`views`] | askama page and fragment rendering |
//! | [`server`] | HTTP server |
//! | [`search`] | CLI search |
//! | [`records`] | CLI record listing |

pub mod config;
pub mod data;
pub mod logging;
pub mod records;
pub mod search;
pub mod server;
pub mod views;
