//! Health check endpoints

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service banner
pub async fn index() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Bookshelf API",
        "data": {
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "authors": "/authors",
                "books": "/books",
                "search": "/books/search",
                "filter": "/books/filter",
                "stats": "/books/stats",
                "docs": "/swagger-ui"
            }
        }
    }))
}
