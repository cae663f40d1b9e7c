//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::{book::BOOK_SORT_FIELDS, Book, CreateBook, UpdateBook},
    query::{
        filter_books, paginate, parse_book_filters, parse_pagination, parse_search, parse_sort,
        search_books, sort_records, BookFilterParams, Page, QueryMap, SearchParams, SortParams,
    },
    repository::{Repository, Store},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, sorted and paginated
    pub async fn list_books(&self, query: &QueryMap) -> (Page<Book>, SortParams) {
        let sort = parse_sort(query, BOOK_SORT_FIELDS);
        let pagination = parse_pagination(query);

        let store = self.repository.read().await;
        let sorted = sort_records(store.books.all(), &sort);
        (paginate(sorted, pagination), sort)
    }

    /// Filter, then sort, then paginate
    pub async fn filter_books(
        &self,
        query: &QueryMap,
    ) -> (Page<Book>, SortParams, BookFilterParams) {
        let filters = parse_book_filters(query);
        let sort = parse_sort(query, BOOK_SORT_FIELDS);
        let pagination = parse_pagination(query);

        let store = self.repository.read().await;
        let filtered = filter_books(store.books.all(), &filters);
        let sorted = sort_records(&filtered, &sort);
        (paginate(sorted, pagination), sort, filters)
    }

    /// Substring search over title, ISBN and author name, then paginate
    pub async fn search_books(&self, query: &QueryMap) -> AppResult<(Page<Book>, SearchParams)> {
        let search = parse_search(query)?;
        let pagination = parse_pagination(query);

        let store = self.repository.read().await;
        let found = search_books(store.books.all(), store.authors.all(), &search);
        Ok((paginate(found, pagination), search))
    }

    /// Books by one existing author, sorted and paginated
    pub async fn books_by_author(
        &self,
        author_id: i32,
        query: &QueryMap,
    ) -> AppResult<(Page<Book>, SortParams)> {
        let sort = parse_sort(query, BOOK_SORT_FIELDS);
        let pagination = parse_pagination(query);

        let store = self.repository.read().await;
        if store.authors.find(author_id).is_none() {
            return Err(AppError::not_found("Author", author_id));
        }
        let books = store.books.by_author(author_id);
        let sorted = sort_records(&books, &sort);
        Ok((paginate(sorted, pagination), sort))
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        let store = self.repository.read().await;
        store
            .books
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Book", id))
    }

    /// Create a new book. The author must exist and the ISBN must be unique.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let mut store = self.repository.write().await;
        check_references(&store, &book, None)?;

        let created = book.into_book(store.books.next_id());
        store.books.push(created.clone());
        tracing::info!(id = created.id, author_id = created.author_id, "book created");
        Ok(created)
    }

    /// Replace every field of an existing book
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        let mut store = self.repository.write().await;
        let index = store
            .books
            .find_index(id)
            .ok_or_else(|| AppError::not_found("Book", id))?;
        check_references(&store, &book, Some(id))?;

        let updated = book.into_book(id);
        store.books.replace_at(index, updated.clone());
        tracing::info!(id, "book updated");
        Ok(updated)
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> AppResult<Book> {
        let mut store = self.repository.write().await;
        let index = store
            .books
            .find_index(id)
            .ok_or_else(|| AppError::not_found("Book", id))?;

        let removed = store.books.remove_at(index);
        tracing::info!(id, "book deleted");
        Ok(removed)
    }
}

fn check_references(store: &Store, book: &CreateBook, exclude_id: Option<i32>) -> AppResult<()> {
    if store.authors.find(book.author_id).is_none() {
        return Err(AppError::not_found("Author", book.author_id));
    }
    if store.books.isbn_exists(&book.isbn, exclude_id) {
        return Err(AppError::Conflict(format!(
            "Book with ISBN {} already exists",
            book.isbn
        )));
    }
    Ok(())
}
