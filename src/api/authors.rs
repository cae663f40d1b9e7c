//! Author endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{Author, Book, CreateAuthor, UpdateAuthor},
    query::QueryMap,
    AppState,
};

use super::{response::ApiResponse, EntityId, ValidatedJson};

/// List authors with sorting and pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(
        ("sortBy" = Option<String>, Query, description = "id, name or email (default: id)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: asc)"),
        ("page" = Option<usize>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<usize>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of authors", body = [Author])
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<QueryMap>,
) -> ApiResponse<Vec<Author>> {
    let (page, sort) = state.services.authors.list_authors(&query).await;
    ApiResponse::page(page).with_sort(sort)
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<ApiResponse<Author>> {
    let author = state.services.authors.get_author(id).await?;
    Ok(ApiResponse::new(author))
}

/// List the books of an author
#[utoipa::path(
    get,
    path = "/authors/{id}/books",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Books by the author", body = [Book]),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn list_author_books(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let books = state.services.authors.get_author_books(id).await?;
    Ok(ApiResponse::new(books))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(author): ValidatedJson<CreateAuthor>,
) -> AppResult<(StatusCode, ApiResponse<Author>)> {
    let created = state.services.authors.create_author(author).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::new(created).with_message("Author created successfully"),
    ))
}

/// Replace an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(author): ValidatedJson<UpdateAuthor>,
) -> AppResult<ApiResponse<Author>> {
    let updated = state.services.authors.update_author(id, author).await?;
    Ok(ApiResponse::new(updated).with_message("Author updated successfully"))
}

/// Delete an author. Its books keep their author id.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<ApiResponse<Author>> {
    let removed = state.services.authors.delete_author(id).await?;
    Ok(ApiResponse::new(removed).with_message("Author deleted successfully"))
}
