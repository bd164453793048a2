//! # Typeahead CLI (`typeahead`)
//!
//! ## Usage
//!
//! ```bash
//! typeahead [--config ./config/typeahead.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `typeahead serve` | Start the HTTP server |
//! | `typeahead search "<query>"` | Filter records from the terminal |
//! | `typeahead records` | List every record in the configured store |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use typeahead::server::AppState;
use typeahead::{config, data, logging, records, search, server};

/// Typeahead: a server-rendered search-as-you-type endpoint.
#[derive(Parser)]
#[command(name = "typeahead", version, about)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// When omitted, `./config/typeahead.toml` is used if it exists,
    /// otherwise built-in defaults apply.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Serves the search page at `/` and result fragments at `/search?q=`.
    Serve {
        /// Override `[server].bind`.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Filter records by a query, as `GET /search` would.
    Search {
        /// The search query string.
        query: String,

        /// Print the raw result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List every record in the configured store.
    Records,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::resolve_config(cli.config.as_deref())?;
    logging::init_logging(&cfg.logging)?;

    match cli.command {
        Commands::Serve { bind } => {
            let store = data::open_store(&cfg)?;
            let bind = bind.unwrap_or_else(|| cfg.server.bind.clone());
            info!(min_query_chars = cfg.search.min_query_chars, "starting server");
            server::run_server(&bind, AppState::new(store, cfg.filter_params())).await?;
        }
        Commands::Search { query, json } => {
            search::run_search(&cfg, &query, json).await?;
        }
        Commands::Records => {
            records::list_records(&cfg).await?;
        }
    }

    Ok(())
}
