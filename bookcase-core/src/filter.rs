//! Title/author/genre filtering over the catalog
//!
//! A book is kept when all three conditions hold:
//!
//! - **Title**: case-insensitive substring match. A query that is empty or
//!   only whitespace matches every book.
//! - **Author**: the resolved author display name equals the selection.
//! - **Genre**: one of the resolved genre names equals the selection.
//!
//! Author and genre are matched on display names rather than keys because the
//! search form offers display names. Output keeps catalog order.

use crate::catalog::Catalog;
use crate::types::Book;

/// Form value meaning "any author"
pub const ALL_AUTHORS: &str = "All Authors";
/// Form value meaning "any genre"
pub const ALL_GENRES: &str = "All Genres";
/// Short sentinel accepted for either field
pub const ALL: &str = "all";

/// A single select-field value: either the match-all sentinel or a display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Named(String),
}

impl Selection {
    /// Interpret a raw form value, treating absent values and sentinels as `All`
    pub fn from_form(value: Option<&str>, sentinel: &str) -> Self {
        match value {
            None => Self::All,
            Some(v) if v == sentinel || v == ALL => Self::All,
            Some(v) => Self::Named(v.to_string()),
        }
    }

    /// Whether this selection accepts the given display name
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(wanted) => wanted == name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Parameters for one search submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title_query: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Criteria that match every book
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Build criteria from the submitted form fields
    ///
    /// Missing fields fall back to their match-all defaults.
    pub fn from_form(title: Option<&str>, author: Option<&str>, genre: Option<&str>) -> Self {
        Self {
            title_query: title.unwrap_or_default().to_string(),
            author: Selection::from_form(author, ALL_AUTHORS),
            genre: Selection::from_form(genre, ALL_GENRES),
        }
    }

    /// Set the title query
    pub fn with_title(mut self, query: impl Into<String>) -> Self {
        self.title_query = query.into();
        self
    }

    /// Restrict to an author display name
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Selection::Named(name.into());
        self
    }

    /// Restrict to a genre display name
    pub fn with_genre(mut self, name: impl Into<String>) -> Self {
        self.genre = Selection::Named(name.into());
        self
    }

    /// Whether every field is a match-all value
    pub fn is_match_all(&self) -> bool {
        self.title_query.trim().is_empty() && self.author.is_all() && self.genre.is_all()
    }

    /// Title condition alone
    pub fn title_matches(&self, title: &str) -> bool {
        self.title_query.trim().is_empty()
            || title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase())
    }

    /// Evaluate all three conditions against one book
    ///
    /// A book whose author or genre keys do not resolve only passes the
    /// corresponding condition when the selection is `All`.
    pub fn matches(&self, catalog: &Catalog, book: &Book) -> bool {
        if !self.title_matches(&book.title) {
            return false;
        }

        let author_ok = self.author.is_all()
            || catalog
                .resolve_author(&book.author)
                .map_or(false, |name| self.author.accepts(name));
        if !author_ok {
            return false;
        }

        self.genre.is_all()
            || book.genres.iter().any(|key| {
                catalog
                    .resolve_genre(key)
                    .map_or(false, |name| self.genre.accepts(name))
            })
    }
}

/// Ordered books matching a set of criteria, borrowed from the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet<'a> {
    books: Vec<&'a Book>,
}

impl<'a> ResultSet<'a> {
    /// The whole catalog, in load order
    pub fn all(catalog: &'a Catalog) -> Self {
        Self {
            books: catalog.all_books().iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[&'a Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Book> + '_ {
        self.books.iter().copied()
    }
}

impl<'a> FromIterator<&'a Book> for ResultSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

/// Select the books matching `criteria`, keeping catalog order
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> ResultSet<'a> {
    if criteria.is_match_all() {
        return ResultSet::all(catalog);
    }

    let results: ResultSet<'a> = catalog
        .all_books()
        .iter()
        .filter(|book| criteria.matches(catalog, book))
        .collect();

    tracing::debug!(
        title = %criteria.title_query,
        author = ?criteria.author,
        genre = ?criteria.genre,
        matches = results.len(),
        "Filtered catalog"
    );

    results
}
