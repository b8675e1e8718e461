//! Display-ready projections of a Book

use super::BookId;
use serde::{Deserialize, Serialize};

/// Read-only preview of a book for the list grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preview {
    /// Source book id, used to correlate a clicked preview with its book
    pub id: BookId,

    pub title: String,

    pub image: String,

    /// Resolved author display name
    pub author_name: String,

    /// Resolved genre display names, in the book's genre order
    pub genre_names: Vec<String>,
}

/// Contents of the book detail overlay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDetail {
    pub id: BookId,

    pub title: String,

    pub image: String,

    /// "Author (Year)", or just the author when the date does not parse
    pub subtitle: String,

    pub description: String,
}
