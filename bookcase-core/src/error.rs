//! Error types for Bookcase Core

use thiserror::Error;

/// Result type alias using BookcaseError
pub type Result<T> = std::result::Result<T, BookcaseError>;

/// Top-level error type for all Bookcase operations
#[derive(Debug, Error)]
pub enum BookcaseError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Pager error: {0}")]
    Pager(#[from] PagerError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key with no matching entry in its table.
///
/// Always a data-integrity fault, never a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown author key: {0}")]
    Author(String),

    #[error("Unknown genre key: {0}")]
    Genre(String),

    #[error("Unknown book id: {0}")]
    Book(String),
}

/// Errors raised by the pager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("No items remaining (cursor {cursor} of {len})")]
    Exhausted { cursor: usize, len: usize },
}

/// Errors that occur while assembling a catalog from raw data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Book {book} references unknown author {author}")]
    DanglingAuthor { book: String, author: String },

    #[error("Book {book} references unknown genre {genre}")]
    DanglingGenre { book: String, genre: String },
}
