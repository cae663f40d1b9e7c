//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
    query::QueryMap,
    services::stats::BookStats,
    AppState,
};

use super::{response::ApiResponse, EntityId, ValidatedJson};

/// List books with sorting and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("sortBy" = Option<String>, Query, description = "id, title, isbn, publishedYear or authorId (default: id)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: asc)"),
        ("page" = Option<usize>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<usize>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of books", body = [Book])
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<QueryMap>,
) -> ApiResponse<Vec<Book>> {
    let (page, sort) = state.services.books.list_books(&query).await;
    ApiResponse::page(page).with_sort(sort)
}

/// Search books by title, ISBN or author name
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(
        ("query" = String, Query, description = "Text to look for (case-insensitive)"),
        ("fields" = Option<String>, Query, description = "Comma separated subset of title,isbn,author (default: all)"),
        ("page" = Option<usize>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<usize>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 400, description = "Missing search query", body = ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<QueryMap>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let (page, search) = state.services.books.search_books(&query).await?;
    let message = format!(
        "Found {} book(s) matching '{}'",
        page.pagination.total, search.query
    );
    Ok(ApiResponse::page(page)
        .with_message(message)
        .with_search(search))
}

/// Filter books, then sort and paginate the result
#[utoipa::path(
    get,
    path = "/books/filter",
    tag = "books",
    params(
        ("authorId" = Option<i32>, Query, description = "Exact author id"),
        ("publishedYear" = Option<i32>, Query, description = "Exact publication year"),
        ("publishedYearFrom" = Option<i32>, Query, description = "Earliest publication year (inclusive)"),
        ("publishedYearTo" = Option<i32>, Query, description = "Latest publication year (inclusive)"),
        ("title" = Option<String>, Query, description = "Title substring (case-insensitive)"),
        ("isbn" = Option<String>, Query, description = "Exact ISBN"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: id)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: asc)"),
        ("page" = Option<usize>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<usize>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Filtered books", body = [Book])
    )
)]
pub async fn filter_books(
    State(state): State<AppState>,
    Query(query): Query<QueryMap>,
) -> ApiResponse<Vec<Book>> {
    let (page, sort, filters) = state.services.books.filter_books(&query).await;
    ApiResponse::page(page).with_sort(sort).with_filters(filters)
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/books/stats",
    tag = "books",
    responses(
        (status = 200, description = "Statistics over every book", body = BookStats)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> ApiResponse<BookStats> {
    ApiResponse::new(state.services.stats.get_stats().await)
}

/// Books by one author, sorted and paginated
#[utoipa::path(
    get,
    path = "/books/author/{authorId}",
    tag = "books",
    params(
        ("authorId" = i32, Path, description = "Author ID"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: id)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: asc)"),
        ("page" = Option<usize>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<usize>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Books by the author", body = [Book]),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn list_books_by_author(
    State(state): State<AppState>,
    EntityId(author_id): EntityId,
    Query(query): Query<QueryMap>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let (page, sort) = state
        .services
        .books
        .books_by_author(author_id, &query)
        .await?;
    Ok(ApiResponse::page(page).with_sort(sort))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<ApiResponse<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(ApiResponse::new(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 409, description = "ISBN already in use", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(book): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, ApiResponse<Book>)> {
    let created = state.services.books.create_book(book).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::new(created).with_message("Book created successfully"),
    ))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Book or author not found", body = ErrorResponse),
        (status = 409, description = "ISBN already in use", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(book): ValidatedJson<UpdateBook>,
) -> AppResult<ApiResponse<Book>> {
    let updated = state.services.books.update_book(id, book).await?;
    Ok(ApiResponse::new(updated).with_message("Book updated successfully"))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<ApiResponse<Book>> {
    let removed = state.services.books.delete_book(id).await?;
    Ok(ApiResponse::new(removed).with_message("Book deleted successfully"))
}
