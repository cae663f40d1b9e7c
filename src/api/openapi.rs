//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory authors and books REST API with search, filtering, sorting and pagination",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::list_author_books,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::search_books,
        books::filter_books,
        books::get_stats,
        books::list_books_by_author,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Models
            crate::models::Author,
            crate::models::CreateAuthor,
            crate::models::Book,
            crate::models::CreateBook,
            // Query directives
            crate::query::PaginationParams,
            crate::query::PaginationMeta,
            crate::query::SortParams,
            crate::query::SortOrder,
            crate::query::BookFilterParams,
            crate::query::SearchParams,
            crate::query::SearchField,
            // Stats
            crate::services::stats::BookStats,
            crate::services::stats::AuthorBookCount,
            crate::services::stats::YearRange,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ErrorBody,
            crate::error::ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog, search, filtering and statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
