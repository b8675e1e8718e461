//! The immutable book collection and its author/genre lookup tables

use crate::error::{CatalogError, LookupError, Result};
use crate::types::{AuthorKey, Book, BookId, GenreKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// Raw catalog document as supplied by the host data module
///
/// The author and genre tables keep the order of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub books: Vec<Book>,
    pub authors: IndexMap<AuthorKey, String>,
    pub genres: IndexMap<GenreKey, String>,
}

/// Validated, read-only catalog
///
/// Every book id is unique and every author and genre reference resolves.
/// Books keep the order in which they were loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: IndexMap<AuthorKey, String>,
    genres: IndexMap<GenreKey, String>,
    index: HashMap<BookId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and dangling references
    ///
    /// The tables keep the order in which their entries are given.
    pub fn new(
        books: Vec<Book>,
        authors: impl IntoIterator<Item = (AuthorKey, String)>,
        genres: impl IntoIterator<Item = (GenreKey, String)>,
    ) -> std::result::Result<Self, CatalogError> {
        let authors: IndexMap<_, _> = authors.into_iter().collect();
        let genres: IndexMap<_, _> = genres.into_iter().collect();
        let mut index = HashMap::with_capacity(books.len());

        for (position, book) in books.iter().enumerate() {
            if index.insert(book.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(book.id.to_string()));
            }
            if !authors.contains_key(&book.author) {
                return Err(CatalogError::DanglingAuthor {
                    book: book.id.to_string(),
                    author: book.author.to_string(),
                });
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains_key(*g)) {
                return Err(CatalogError::DanglingGenre {
                    book: book.id.to_string(),
                    genre: genre.to_string(),
                });
            }
        }

        tracing::debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "Catalog loaded"
        );

        Ok(Self {
            books,
            authors,
            genres,
            index,
        })
    }

    /// Build a catalog without checking ids or references
    #[cfg(test)]
    pub(crate) fn new_unchecked(
        books: Vec<Book>,
        authors: impl IntoIterator<Item = (AuthorKey, String)>,
        genres: impl IntoIterator<Item = (GenreKey, String)>,
    ) -> Self {
        let index = books
            .iter()
            .enumerate()
            .map(|(position, book)| (book.id.clone(), position))
            .collect();
        Self {
            books,
            authors: authors.into_iter().collect(),
            genres: genres.into_iter().collect(),
            index,
        }
    }

    /// Parse and validate a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::try_from(data)?)
    }

    /// Parse and validate a catalog from a reader yielding a JSON document
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let data: CatalogData = serde_json::from_reader(reader)?;
        Ok(Self::try_from(data)?)
    }

    /// All books in load order
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id
    pub fn find_by_id(&self, id: &BookId) -> std::result::Result<&Book, LookupError> {
        self.index
            .get(id)
            .map(|&position| &self.books[position])
            .ok_or_else(|| LookupError::Book(id.to_string()))
    }

    /// Resolve an author key to its display name
    pub fn resolve_author(&self, key: &AuthorKey) -> std::result::Result<&str, LookupError> {
        self.authors
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LookupError::Author(key.to_string()))
    }

    /// Resolve a genre key to its display name
    pub fn resolve_genre(&self, key: &GenreKey) -> std::result::Result<&str, LookupError> {
        self.genres
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LookupError::Genre(key.to_string()))
    }

    /// Author display names in table order (may contain duplicates)
    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authors.values().map(String::as_str)
    }

    /// Genre display names in table order
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.values().map(String::as_str)
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> std::result::Result<Self, Self::Error> {
        Self::new(data.books, data.authors, data.genres)
    }
}
