//! Projection of raw books into display-ready values

use crate::catalog::Catalog;
use crate::error::LookupError;
use crate::types::{Book, BookDetail, Preview};

/// Project a book into its list preview
///
/// Fails on the first author or genre key that does not resolve; a genre is
/// never silently dropped.
pub fn project(catalog: &Catalog, book: &Book) -> Result<Preview, LookupError> {
    let author_name = catalog.resolve_author(&book.author)?.to_string();
    let genre_names = book
        .genres
        .iter()
        .map(|key| catalog.resolve_genre(key).map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Preview {
        id: book.id.clone(),
        title: book.title.clone(),
        image: book.image.clone(),
        author_name,
        genre_names,
    })
}

/// Build the detail overlay for a book
pub fn detail(catalog: &Catalog, book: &Book) -> Result<BookDetail, LookupError> {
    let author = catalog.resolve_author(&book.author)?;
    let subtitle = match book.published_year() {
        Some(year) => format!("{} ({})", author, year),
        None => author.to_string(),
    };

    Ok(BookDetail {
        id: book.id.clone(),
        title: book.title.clone(),
        image: book.image.clone(),
        subtitle,
        description: book.description.clone(),
    })
}
