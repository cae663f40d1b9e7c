//! Book-specific store lookups

use super::Collection;
use crate::models::Book;

impl Collection<Book> {
    /// Exact ISBN lookup, ignoring `exclude_id`
    pub fn isbn_exists(&self, isbn: &str, exclude_id: Option<i32>) -> bool {
        self.all()
            .iter()
            .any(|b| Some(b.id) != exclude_id && b.isbn == isbn)
    }

    /// Books referencing `author_id`, in store order
    pub fn by_author(&self, author_id: i32) -> Vec<Book> {
        self.all()
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }
}
