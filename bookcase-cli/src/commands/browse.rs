//! Browse and search command implementations

use crate::config::Config;
use crate::render::write_page;
use anyhow::Result;
use bookcase_core::{FilterCriteria, Page, Session};
use std::io::Write;

/// Print the first pages of the full catalog
pub fn browse(config: &Config, pages: usize, json: bool) -> Result<()> {
    let catalog = config.load_catalog()?;
    let session = Session::with_page_size(&catalog, config.page_size);
    let collected = collect_pages(session, FilterCriteria::match_all(), pages)?;
    print_pages(&collected, json)
}

/// Print the first pages of a filtered search
pub fn search(
    config: &Config,
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    pages: usize,
    json: bool,
) -> Result<()> {
    let catalog = config.load_catalog()?;
    let session = Session::with_page_size(&catalog, config.page_size);
    let criteria = FilterCriteria::from_form(title.as_deref(), author.as_deref(), genre.as_deref());
    let collected = collect_pages(session, criteria, pages)?;
    print_pages(&collected, json)
}

/// Gather up to `pages` pages, stopping early when the results run out
fn collect_pages(
    mut session: Session<'_>,
    criteria: FilterCriteria,
    pages: usize,
) -> Result<Vec<Page>> {
    let mut collected = vec![session.search(criteria)?];
    while collected.len() < pages && session.show_more_state().is_enabled() {
        collected.push(session.show_more()?);
    }
    Ok(collected)
}

fn print_pages(pages: &[Page], json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(pages)?)?;
    } else {
        for page in pages {
            write_page(&mut out, page)?;
        }
    }
    Ok(())
}
