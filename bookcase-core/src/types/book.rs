//! The raw Book record as supplied by the host data module

use super::{AuthorKey, BookId, GenreKey};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single book in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for this book
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Key into the author table
    pub author: AuthorKey,

    /// Cover image URI
    pub image: String,

    /// Publication date as supplied (usually RFC 3339)
    pub published: String,

    /// Book description/summary
    pub description: String,

    /// Ordered keys into the genre table
    pub genres: Vec<GenreKey>,
}

impl Book {
    /// Create a new book with the given id, title and author
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<AuthorKey>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image: String::new(),
            published: String::new(),
            description: String::new(),
            genres: Vec::new(),
        }
    }

    /// Add a genre key
    pub fn with_genre(mut self, genre: impl Into<GenreKey>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set the cover image URI
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the publication date
    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = published.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Year of publication, if `published` is an RFC 3339 timestamp or a
    /// `YYYY-MM-DD` date
    pub fn published_year(&self) -> Option<i32> {
        let published = self.published.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(published) {
            return Some(timestamp.year());
        }
        NaiveDate::parse_from_str(published, "%Y-%m-%d")
            .ok()
            .map(|date| date.year())
    }
}
