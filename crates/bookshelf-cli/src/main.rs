//! Bookshelf Command-Line Demo
//!
//! Builds a sample catalog, then searches, walks, and filters it.

mod config;
mod demo;
mod formatter;

use bookshelf_core::{Category, Predicate};
use clap::Parser;
use config::ShelfConfig;
use formatter::OutputFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default log directive when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVE: &str = "bookshelf=info";

/// Bookshelf Command-Line Demo
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about = "Search, filter, and walk a sample book catalog")]
pub struct Args {
    /// Title to search for (case-insensitive)
    #[arg(short = 's', long, default_value = config::DEFAULT_SEARCH_TITLE)]
    pub search: String,

    /// Skip the search section
    #[arg(long, conflicts_with = "search")]
    pub no_search: bool,

    /// Only list books in this category
    #[arg(short = 'c', long)]
    pub category: Option<Category>,

    /// Only list books by this author (case-insensitive)
    #[arg(short = 'a', long)]
    pub author: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Skip the backward walk
    #[arg(long)]
    pub forward_only: bool,
}

impl Args {
    /// Fold the arguments into a demo configuration.
    fn into_config(self) -> ShelfConfig {
        let mut filters = Vec::new();
        if let Some(category) = self.category {
            filters.push(Predicate::category(category));
        }
        if let Some(author) = self.author {
            filters.push(Predicate::author(author));
        }

        let config = ShelfConfig::new()
            .with_format(self.format)
            .with_backward(!self.forward_only);
        let config = if self.no_search {
            config.without_search()
        } else {
            config.with_search_title(self.search)
        };

        if filters.is_empty() {
            config
        } else {
            config.with_filter(Predicate::all(filters))
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.into_config();
    debug!(?config, "starting demo");

    let catalog = demo::create_demo_catalog();
    let formatter = formatter::create_formatter(config.format);

    let output = demo::run(&catalog, &config, &*formatter)?;
    println!("{}", output);

    Ok(())
}
