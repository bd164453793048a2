//! HTML views rendered with askama.
//!
//! | Template | Purpose |
//! |----------|---------|
//! | `templates/index.html` | Full page with the search box |
//! | `templates/partials/results.html` | Results fragment swapped in as the user types |

use anyhow::{Context, Result};
use askama::Template;

use typeahead_core::filter::QueryResult;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    min_query_chars: usize,
}

#[derive(Template)]
#[template(path = "partials/results.html")]
struct ResultsFragment<'a> {
    result: &'a QueryResult,
    min_query_chars: usize,
}

/// Render the initial full page. No query is processed here.
pub fn render_index(min_query_chars: usize) -> Result<String> {
    IndexPage { min_query_chars }
        .render()
        .context("Failed to render index page")
}

/// Render the results fragment for one filter invocation.
pub fn render_results(result: &QueryResult, min_query_chars: usize) -> Result<String> {
    ResultsFragment {
        result,
        min_query_chars,
    }
    .render()
    .context("Failed to render results fragment")
}
