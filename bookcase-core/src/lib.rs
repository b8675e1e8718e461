//! Bookcase Core Library
//!
//! This crate provides the catalog model and the browsing logic behind the
//! Bookcase book browser: filtering a catalog by title, author and genre,
//! paging through the results, and projecting books into display-ready
//! previews. Nothing in here renders; the presentation layer drives a
//! [`Session`] and draws what it returns.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod options;
pub mod pager;
pub mod preview;
pub mod session;
pub mod theme;
pub mod types;

pub use catalog::{Catalog, CatalogData};
pub use error::{BookcaseError, CatalogError, LookupError, PagerError, Result};
pub use filter::{filter, FilterCriteria, ResultSet, Selection};
pub use pager::{Pager, PagerState, ShowMore, BOOKS_PER_PAGE};
pub use preview::project;
pub use session::{Page, Session, SkippedBook};
pub use theme::{Palette, Rgb, Theme};
pub use types::{AuthorKey, Book, BookDetail, BookId, GenreKey, Preview};
