//! Core types for the book catalog

mod book;
mod keys;
mod preview;

pub use book::Book;
pub use keys::{AuthorKey, BookId, GenreKey};
pub use preview::{BookDetail, Preview};
