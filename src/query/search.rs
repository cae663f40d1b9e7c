//! Disjunctive substring search across book fields

use super::params::{SearchField, SearchParams};
use crate::models::{Author, Book};

/// Keeps books where any requested field contains the query, case-insensitively.
///
/// The `author` field resolves `book.author_id` against `authors`; a book whose
/// author no longer exists simply does not match on that field.
pub fn search_books(books: &[Book], authors: &[Author], params: &SearchParams) -> Vec<Book> {
    let needle = params.query.trim().to_lowercase();
    if needle.is_empty() {
        return books.to_vec();
    }

    books
        .iter()
        .filter(|book| {
            params.fields.iter().any(|field| match field {
                SearchField::Title => book.title.to_lowercase().contains(&needle),
                SearchField::Isbn => book.isbn.to_lowercase().contains(&needle),
                SearchField::Author => authors
                    .iter()
                    .find(|a| a.id == book.author_id)
                    .is_some_and(|a| a.name.to_lowercase().contains(&needle)),
            })
        })
        .cloned()
        .collect()
}
