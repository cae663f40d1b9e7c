//! Conjunctive book filtering

use super::params::BookFilterParams;
use crate::models::Book;

impl BookFilterParams {
    pub fn is_empty(&self) -> bool {
        self == &BookFilterParams::default()
    }

    /// True when `book` satisfies every filter that is set.
    pub fn matches(&self, book: &Book) -> bool {
        if self.author_id.is_some_and(|id| book.author_id != id) {
            return false;
        }
        if self.published_year.is_some_and(|y| book.published_year != y) {
            return false;
        }
        if self.published_year_from.is_some_and(|y| book.published_year < y) {
            return false;
        }
        if self.published_year_to.is_some_and(|y| book.published_year > y) {
            return false;
        }
        if let Some(ref title) = self.title {
            if !book.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref isbn) = self.isbn {
            if &book.isbn != isbn {
                return false;
            }
        }
        true
    }
}

/// Keeps the books matching `filters`, in their original order.
pub fn filter_books(books: &[Book], filters: &BookFilterParams) -> Vec<Book> {
    books
        .iter()
        .filter(|book| filters.matches(book))
        .cloned()
        .collect()
}
