//! Fixed-size pagination over a result set

use crate::error::PagerError;
use crate::filter::ResultSet;
use crate::types::Book;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Default number of previews per page
pub const BOOKS_PER_PAGE: usize = 36;

/// Whether a pager has anything left to hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PagerState {
    /// cursor < result length
    Active,
    /// cursor >= result length
    Exhausted,
}

/// Cursor over a bound result set
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    page_size: NonZeroUsize,
    cursor: usize,
    results: ResultSet<'a>,
}

impl<'a> Pager<'a> {
    /// Create a pager with the default page size bound to `results`
    pub fn new(results: ResultSet<'a>) -> Self {
        Self::with_page_size(results, default_page_size())
    }

    /// Create a pager with a custom page size bound to `results`
    pub fn with_page_size(results: ResultSet<'a>, page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            cursor: 0,
            results,
        }
    }

    /// Bind to a new result set and rewind to the start
    pub fn reset(&mut self, results: ResultSet<'a>) {
        self.results = results;
        self.cursor = 0;
    }

    /// Hand out the next page and advance the cursor past it
    ///
    /// The last page may be shorter than the page size.
    pub fn next_slice(&mut self) -> Result<Vec<&'a Book>, PagerError> {
        let len = self.results.len();
        if self.cursor >= len {
            return Err(PagerError::Exhausted {
                cursor: self.cursor,
                len,
            });
        }

        let end = self.cursor.saturating_add(self.page_size.get()).min(len);
        let slice = self.results.books()[self.cursor..end].to_vec();
        self.cursor = end;
        Ok(slice)
    }

    /// Items not yet handed out
    pub fn remaining(&self) -> usize {
        self.results.len().saturating_sub(self.cursor)
    }

    pub fn state(&self) -> PagerState {
        if self.cursor < self.results.len() {
            PagerState::Active
        } else {
            PagerState::Exhausted
        }
    }

    /// Number of items already handed out
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The result set this pager is bound to
    pub fn results(&self) -> &ResultSet<'a> {
        &self.results
    }

    /// State of the "show more" control
    pub fn show_more(&self) -> ShowMore {
        ShowMore {
            remaining: self.remaining(),
        }
    }
}

/// Label and enabled state of the "show more" control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    pub remaining: usize,
}

impl ShowMore {
    pub fn is_enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl fmt::Display for ShowMore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Show more ({})", self.remaining)
    }
}

/// `BOOKS_PER_PAGE` as a `NonZeroUsize`
pub fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(BOOKS_PER_PAGE).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::{filter, FilterCriteria};
    use crate::types::{AuthorKey, GenreKey};
    use std::collections::BTreeMap;

    fn catalog(count: usize) -> Catalog {
        let authors = BTreeMap::from([(AuthorKey::new("a1"), "Anon".to_string())]);
        let genres = BTreeMap::from([(GenreKey::new("g1"), "Misc".to_string())]);
        let books = (0..count)
            .map(|i| Book::new(format!("b{}", i), format!("Book {}", i), "a1").with_genre("g1"))
            .collect();
        Catalog::new(books, authors, genres).unwrap()
    }

    #[test]
    fn test_forty_books_in_two_pages() {
        let catalog = catalog(40);
        let mut pager = Pager::new(ResultSet::all(&catalog));

        assert_eq!(pager.state(), PagerState::Active);
        assert_eq!(pager.remaining(), 40);

        let first = pager.next_slice().unwrap();
        assert_eq!(first.len(), 36);
        assert_eq!(first[0].id.as_str(), "b0");
        assert_eq!(pager.remaining(), 4);
        assert_eq!(pager.state(), PagerState::Active);

        let second = pager.next_slice().unwrap();
        assert_eq!(second.len(), 4);
        assert_eq!(second[3].id.as_str(), "b39");
        assert_eq!(pager.remaining(), 0);
        assert_eq!(pager.state(), PagerState::Exhausted);
    }

    #[test]
    fn test_next_slice_when_exhausted() {
        let catalog = catalog(3);
        let mut pager = Pager::new(ResultSet::all(&catalog));
        pager.next_slice().unwrap();

        assert_eq!(
            pager.next_slice(),
            Err(PagerError::Exhausted { cursor: 3, len: 3 })
        );
        assert_eq!(pager.remaining(), 0);
    }

    #[test]
    fn test_reset_on_empty_results_is_exhausted() {
        let catalog = catalog(5);
        let mut pager = Pager::new(ResultSet::all(&catalog));
        pager.next_slice().unwrap();

        let none = filter(&catalog, &FilterCriteria::match_all().with_title("zzzznomatch"));
        pager.reset(none);
        assert_eq!(pager.cursor(), 0);
        assert_eq!(pager.state(), PagerState::Exhausted);
        assert!(pager.next_slice().is_err());
    }

    #[test]
    fn test_reset_rewinds_cursor() {
        let catalog = catalog(10);
        let page_size = NonZeroUsize::new(4).unwrap();
        let mut pager = Pager::with_page_size(ResultSet::all(&catalog), page_size);
        pager.next_slice().unwrap();
        pager.next_slice().unwrap();
        assert_eq!(pager.remaining(), 2);

        pager.reset(ResultSet::all(&catalog));
        assert_eq!(pager.remaining(), 10);
        assert_eq!(pager.next_slice().unwrap().len(), 4);
    }

    #[test]
    fn test_show_more_label() {
        let catalog = catalog(40);
        let mut pager = Pager::new(ResultSet::all(&catalog));
        pager.next_slice().unwrap();

        let show_more = pager.show_more();
        assert!(show_more.is_enabled());
        assert_eq!(show_more.to_string(), "Show more (4)");

        pager.next_slice().unwrap();
        assert!(!pager.show_more().is_enabled());
        assert_eq!(pager.show_more().to_string(), "Show more (0)");
    }
}
