//! Plain-text rendering of pages, details and settings

use bookcase_core::{BookDetail, Page, Theme};
use std::io::{self, Write};

/// Shown in place of the list when a search matches nothing
pub const NO_RESULTS: &str = "No results found. Your filters might be too narrow.";

/// Write one page of previews followed by the show-more label
pub fn write_page(out: &mut impl Write, page: &Page) -> io::Result<()> {
    if page.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        return Ok(());
    }

    for preview in &page.previews {
        write!(out, "{}  {} by {}", preview.id, preview.title, preview.author_name)?;
        if !preview.genre_names.is_empty() {
            write!(out, " [{}]", preview.genre_names.join(", "))?;
        }
        writeln!(out)?;
    }
    for skipped in &page.skipped {
        writeln!(out, "{}  (unavailable: {})", skipped.id, skipped.reason)?;
    }

    if page.show_more.is_enabled() {
        writeln!(out, "{}", page.show_more)?;
    } else {
        writeln!(out, "{} - end of list", page.show_more)?;
    }
    Ok(())
}

pub fn write_detail(out: &mut impl Write, detail: &BookDetail) -> io::Result<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "{}", detail.subtitle)?;
    if !detail.image.is_empty() {
        writeln!(out, "Cover: {}", detail.image)?;
    }
    if !detail.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", detail.description)?;
    }
    Ok(())
}

pub fn write_options(out: &mut impl Write, authors: &[String], genres: &[String]) -> io::Result<()> {
    writeln!(out, "Authors:")?;
    for author in authors {
        writeln!(out, "  {}", author)?;
    }
    writeln!(out, "Genres:")?;
    for genre in genres {
        writeln!(out, "  {}", genre)?;
    }
    Ok(())
}

pub fn write_theme(out: &mut impl Write, theme: Theme) -> io::Result<()> {
    let palette = theme.palette();
    writeln!(out, "Theme:      {}", theme)?;
    writeln!(out, "Text:       {}", palette.text)?;
    writeln!(out, "Background: {}", palette.background)
}
