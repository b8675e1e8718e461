//! Browsing session: the controller behind the book list
//!
//! A [`Session`] owns the active filter criteria, the result set and the pager
//! bound to it. The presentation layer invokes its command methods in response
//! to user actions; each call runs to completion and a new search replaces
//! the previous result set and pager wholesale.

use crate::catalog::Catalog;
use crate::error::{LookupError, Result};
use crate::filter::{filter, FilterCriteria, ResultSet};
use crate::pager::{default_page_size, Pager, PagerState, ShowMore};
use crate::preview::{detail, project};
use crate::theme::Theme;
use crate::types::{BookDetail, BookId, Preview};
use serde::Serialize;
use std::num::NonZeroUsize;

/// One batch of previews handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Previews to append to the list, in result order
    pub previews: Vec<Preview>,

    /// Books left out of this page because their projection failed
    pub skipped: Vec<SkippedBook>,

    /// "Show more" state after this page
    pub show_more: ShowMore,

    /// Total size of the active result set
    pub total: usize,
}

impl Page {
    /// True when the active result set has no books ("no results" state)
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A book whose preview could not be built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedBook {
    pub id: BookId,
    pub reason: String,
}

/// Browsing state over a single catalog
#[derive(Debug, Clone)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    criteria: FilterCriteria,
    pager: Pager<'a>,
    theme: Theme,
}

impl<'a> Session<'a> {
    /// Start a session showing the whole catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_page_size(catalog, default_page_size())
    }

    /// Start a session with a custom page size
    pub fn with_page_size(catalog: &'a Catalog, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::match_all(),
            pager: Pager::with_page_size(ResultSet::all(catalog), page_size),
            theme: Theme::default(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Criteria behind the active result set
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pager(&self) -> &Pager<'a> {
        &self.pager
    }

    pub fn state(&self) -> PagerState {
        self.pager.state()
    }

    pub fn show_more_state(&self) -> ShowMore {
        self.pager.show_more()
    }

    /// Apply new criteria and return the first page of results
    ///
    /// An empty result set yields an empty page rather than an error.
    pub fn search(&mut self, criteria: FilterCriteria) -> Result<Page> {
        let results = filter(self.catalog, &criteria);
        self.pager = Pager::with_page_size(results, self.pager.page_size());
        self.criteria = criteria;

        if self.pager.state() == PagerState::Exhausted {
            tracing::debug!("Search matched no books");
            return Ok(self.page(Vec::new(), Vec::new()));
        }
        self.show_more()
    }

    /// Hand out the next page of the active result set
    ///
    /// Fails with [`crate::PagerError::Exhausted`] when nothing is left; check
    /// [`Session::show_more_state`] first.
    pub fn show_more(&mut self) -> Result<Page> {
        let books = self.pager.next_slice()?;
        let mut previews = Vec::with_capacity(books.len());
        let mut skipped = Vec::new();

        for book in books {
            match project(self.catalog, book) {
                Ok(preview) => previews.push(preview),
                Err(err) => {
                    tracing::warn!(book = %book.id, error = %err, "Skipping book preview");
                    skipped.push(SkippedBook {
                        id: book.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            shown = previews.len(),
            remaining = self.pager.remaining(),
            "Page rendered"
        );
        Ok(self.page(previews, skipped))
    }

    /// Detail overlay for the book behind a clicked preview
    pub fn detail(&self, id: &BookId) -> std::result::Result<BookDetail, LookupError> {
        let book = self.catalog.find_by_id(id)?;
        detail(self.catalog, book)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Store the theme chosen in settings
    pub fn apply_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = %theme, "Theme changed");
        self.theme = theme;
    }

    fn page(&self, previews: Vec<Preview>, skipped: Vec<SkippedBook>) -> Page {
        Page {
            previews,
            skipped,
            show_more: self.pager.show_more(),
            total: self.pager.results().len(),
        }
    }
}
