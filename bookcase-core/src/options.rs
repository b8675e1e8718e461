//! Choices offered by the search form's author and genre fields

use crate::catalog::Catalog;
use crate::filter::{ALL_AUTHORS, ALL_GENRES};
use std::collections::HashSet;

/// `"All Authors"` followed by each distinct author name in table order
pub fn author_options(catalog: &Catalog) -> Vec<String> {
    with_sentinel(ALL_AUTHORS, catalog.author_names())
}

/// `"All Genres"` followed by each distinct genre name in table order
pub fn genre_options(catalog: &Catalog) -> Vec<String> {
    with_sentinel(ALL_GENRES, catalog.genre_names())
}

fn with_sentinel<'a>(sentinel: &'a str, names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(sentinel)
        .chain(names.filter(|name| seen.insert(*name)))
        .map(str::to_string)
        .collect()
}
