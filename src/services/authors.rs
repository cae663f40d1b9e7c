//! Author management service

use crate::{
    error::{AppError, AppResult},
    models::{author::AUTHOR_SORT_FIELDS, Author, Book, CreateAuthor, UpdateAuthor},
    query::{paginate, parse_pagination, parse_sort, sort_records, Page, QueryMap, SortParams},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List authors, sorted and paginated from the raw query string
    pub async fn list_authors(&self, query: &QueryMap) -> (Page<Author>, SortParams) {
        let sort = parse_sort(query, AUTHOR_SORT_FIELDS);
        let pagination = parse_pagination(query);

        let store = self.repository.read().await;
        let sorted = sort_records(store.authors.all(), &sort);
        (paginate(sorted, pagination), sort)
    }

    /// Get author by ID
    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        let store = self.repository.read().await;
        store
            .authors
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Author", id))
    }

    /// Books referencing an existing author, in store order
    pub async fn get_author_books(&self, id: i32) -> AppResult<Vec<Book>> {
        let store = self.repository.read().await;
        if store.authors.find(id).is_none() {
            return Err(AppError::not_found("Author", id));
        }
        Ok(store.books.by_author(id))
    }

    /// Create a new author. Email must be unique.
    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        let mut store = self.repository.write().await;
        if store.authors.email_exists(&author.email, None) {
            return Err(AppError::Conflict(format!(
                "Author with email {} already exists",
                author.email
            )));
        }

        let created = author.into_author(store.authors.next_id());
        store.authors.push(created.clone());
        tracing::info!(id = created.id, "author created");
        Ok(created)
    }

    /// Replace name, email and bio of an existing author
    pub async fn update_author(&self, id: i32, author: UpdateAuthor) -> AppResult<Author> {
        let mut store = self.repository.write().await;
        let index = store
            .authors
            .find_index(id)
            .ok_or_else(|| AppError::not_found("Author", id))?;

        if store.authors.email_exists(&author.email, Some(id)) {
            return Err(AppError::Conflict(format!(
                "Author with email {} already exists",
                author.email
            )));
        }

        let updated = author.into_author(id);
        store.authors.replace_at(index, updated.clone());
        tracing::info!(id, "author updated");
        Ok(updated)
    }

    /// Delete an author. Books referencing it are left untouched.
    pub async fn delete_author(&self, id: i32) -> AppResult<Author> {
        let mut store = self.repository.write().await;
        let index = store
            .authors
            .find_index(id)
            .ok_or_else(|| AppError::not_found("Author", id))?;

        let removed = store.authors.remove_at(index);
        let orphaned = store.books.by_author(id).len();
        if orphaned > 0 {
            tracing::warn!(id, orphaned, "author deleted with books still referencing it");
        } else {
            tracing::info!(id, "author deleted");
        }
        Ok(removed)
    }
}
