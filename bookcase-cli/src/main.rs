//! Bookcase CLI - Command-line book catalog browser

mod commands;
mod config;
mod render;

use anyhow::Result;
use bookcase_core::Theme;
use clap::{Parser, Subcommand};
use config::Config;
use std::num::NonZeroUsize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate page size argument (must be at least 1)
fn parse_page_size(s: &str) -> Result<NonZeroUsize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    NonZeroUsize::new(n).ok_or_else(|| "page size must be at least 1".to_string())
}

/// Parse a page count for browse and search (must be at least 1)
fn parse_pages(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("pages must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid number", s)),
    }
}

/// Parse a theme name (day or night)
fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "bookcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog JSON file (falls back to BOOKCASE_CATALOG)
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Books per page (falls back to BOOKCASE_PAGE_SIZE, then 36)
    #[arg(long, global = true, value_parser = parse_page_size)]
    page_size: Option<NonZeroUsize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the full catalog page by page
    Browse {
        /// Number of pages to show
        #[arg(short, long, default_value = "1", value_parser = parse_pages)]
        pages: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog by title, author and genre
    Search {
        /// Case-insensitive title fragment
        #[arg(short, long)]
        title: Option<String>,

        /// Author display name ("All Authors" for any)
        #[arg(short, long)]
        author: Option<String>,

        /// Genre display name ("All Genres" for any)
        #[arg(short, long)]
        genre: Option<String>,

        /// Number of pages to show
        #[arg(short, long, default_value = "1", value_parser = parse_pages)]
        pages: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of a single book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the author and genre choices of the search form
    Options,

    /// Show the colours of a theme
    Theme {
        /// Theme name (falls back to BOOKCASE_THEME, then day)
        #[arg(value_parser = parse_theme)]
        name: Option<Theme>,
    },

    /// Start an interactive browsing session on stdin
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookcase_cli=debug,bookcase_core=debug"
    } else {
        "bookcase_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::resolve(cli.catalog, cli.page_size)?;

    match cli.command {
        Commands::Browse { pages, json } => commands::browse(&config, pages, json),

        Commands::Search {
            title,
            author,
            genre,
            pages,
            json,
        } => commands::search(&config, title, author, genre, pages, json),

        Commands::Show { id, json } => commands::show(&config, &id, json),

        Commands::Options => commands::options(&config),

        Commands::Theme { name } => commands::theme(&config, name),

        Commands::Shell => commands::shell(&config),
    }
}
