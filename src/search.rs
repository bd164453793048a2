//! Command-line search.
//!
//! Runs the same filter as `GET /search` against the configured record
//! store and prints the outcome. Used by `typeahead search`.

use anyhow::Result;

use typeahead_core::filter::{filter_with, QueryResult};

use crate::config::Config;
use crate::data;
use crate::records::format_table;

/// Filter the configured records by `query`.
pub async fn search_records(config: &Config, query: &str) -> Result<QueryResult> {
    let store = data::open_store(config)?;
    let records = store.list_all_records().await?;
    Ok(filter_with(&config.filter_params(), query, &records))
}

pub async fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let result = search_records(config, query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result, config.search.min_query_chars));
    }

    Ok(())
}

fn format_result(result: &QueryResult, min_query_chars: usize) -> String {
    if result.query_too_short {
        format!(
            "Query too short: type at least {} characters.\n",
            min_query_chars
        )
    } else if result.matches.is_empty() {
        format!("No results for '{}'.\n", result.query)
    } else {
        format_table(&result.matches)
    }
}
