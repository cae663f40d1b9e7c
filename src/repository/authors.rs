//! Author-specific store lookups

use super::Collection;
use crate::models::Author;

impl Collection<Author> {
    /// Case-insensitive email lookup, ignoring `exclude_id`
    pub fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> bool {
        self.all()
            .iter()
            .any(|a| Some(a.id) != exclude_id && a.email.eq_ignore_ascii_case(email))
    }
}
