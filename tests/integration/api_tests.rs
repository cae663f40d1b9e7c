//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{
    api::{create_router, with_middleware},
    repository::Store,
    AppConfig, AppState,
};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data is not an array")
        .iter()
        .map(|b| b["id"].as_i64().expect("No id"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_books_defaults() {
    let (status, body) = get(&app(), "/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["totalPages"], 1);
    assert_eq!(body["pagination"]["hasNext"], false);
    assert_eq!(body["pagination"]["hasPrev"], false);
    assert_eq!(body["sort"]["sortBy"], "id");
    assert_eq!(body["sort"]["sortOrder"], "asc");
    assert_eq!(body["data"][0]["publishedYear"], 1997);
    assert_eq!(body["data"][0]["authorId"], 1);
}

#[tokio::test]
async fn test_list_books_sorted_desc() {
    let (_, body) = get(&app(), "/books?sortBy=publishedYear&sortOrder=desc").await;
    assert_eq!(ids(&body), vec![2, 1, 4, 3, 5]);
    assert_eq!(body["sort"]["sortOrder"], "desc");
}

#[tokio::test]
async fn test_invalid_query_values_fall_back() {
    let (status, body) = get(&app(), "/books?page=zero&limit=5000&sortBy=secret&sortOrder=sideways").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 100);
    assert_eq!(body["sort"]["sortBy"], "id");
    assert_eq!(body["sort"]["sortOrder"], "asc");
}

#[tokio::test]
async fn test_pages_cover_the_collection() {
    let app = app();
    let mut seen = Vec::new();
    for page in 1..=3 {
        let (_, body) = get(&app, &format!("/books?limit=2&page={}", page)).await;
        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["pagination"]["hasPrev"], page > 1);
        assert_eq!(body["pagination"]["hasNext"], page < 3);
        seen.extend(ids(&body));
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    let (_, body) = get(&app, "/books?limit=2&page=9").await;
    assert!(ids(&body).is_empty());
    assert_eq!(body["pagination"]["total"], 5);
}

#[tokio::test]
async fn test_get_book_and_not_found_envelope() {
    let app = app();
    let (status, body) = get(&app, "/books/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "The Shining");

    let (status, body) = get(&app, "/books/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["message"], "Book with id 999 not found");
    assert_eq!(body["error"]["statusCode"], 404);
    assert_eq!(body["error"]["errorCode"], "NOT_FOUND");
    assert_eq!(body["error"]["path"], "/books/999");
    assert_eq!(body["error"]["method"], "GET");
    assert!(body["error"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (status, body) = get(&app(), "/books/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["errorCode"], "BAD_REQUEST");

    let (status, _) = get(&app(), "/authors/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get(&app(), "/publishers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Route GET /publishers not found");
    assert_eq!(body["error"]["path"], "/publishers");
}

#[tokio::test]
async fn test_unsupported_method() {
    let (status, body) = send(&app(), Method::PATCH, "/books/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["statusCode"], 405);
    assert_eq!(body["error"]["errorCode"], "METHOD_NOT_ALLOWED");
    assert_eq!(body["error"]["message"], "Method PATCH not allowed on /books/1");
    assert_eq!(body["error"]["path"], "/books/1");
    assert_eq!(body["error"]["method"], "PATCH");
}

async fn boom() -> &'static str {
    panic!("boom secret")
}

fn panicking_app(expose_internal_errors: bool) -> Router {
    let mut config = AppConfig::default();
    config.api.expose_internal_errors = expose_internal_errors;
    let router = Router::new().route("/boom", axum::routing::get(boom));
    with_middleware(router, AppState::new(config))
}

#[tokio::test]
async fn test_panic_is_reported_as_internal_error() {
    let (status, body) = get(&panicking_app(false), "/boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["statusCode"], 500);
    assert_eq!(body["error"]["errorCode"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["error"]["message"], "Internal server error");
    assert_eq!(body["error"]["path"], "/boom");
    assert_eq!(body["error"]["method"], "GET");
}

#[tokio::test]
async fn test_panic_detail_only_when_exposed() {
    let (status, body) = get(&panicking_app(true), "/boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Internal server error: boom secret");

    let (_, body) = get(&panicking_app(false), "/boom").await;
    assert!(!body["error"]["message"]
        .as_str()
        .expect("No message")
        .contains("boom secret"));
}

#[tokio::test]
async fn test_search() {
    let app = app();
    let (status, body) = get(&app, "/books/search?query=potter").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["search"]["query"], "potter");
    assert_eq!(body["search"]["fields"], json!(["title", "isbn", "author"]));

    let (_, body) = get(&app, "/books/search?query=christie&fields=author").await;
    assert_eq!(ids(&body), vec![5]);

    let (_, body) = get(&app, "/books/search?query=christie&fields=title,isbn").await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn test_search_without_query() {
    let (status, body) = get(&app(), "/books/search?query=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["errorCode"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["path"], "/books/search");
}

#[tokio::test]
async fn test_filter() {
    let (status, body) = get(
        &app(),
        "/books/filter?publishedYearFrom=1970&publishedYearTo=1990&title=&sortBy=title",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![4, 3]);
    assert_eq!(
        body["filters"],
        json!({ "publishedYearFrom": 1970, "publishedYearTo": 1990 })
    );
    assert_eq!(body["sort"]["sortBy"], "title");
}

#[tokio::test]
async fn test_books_by_author() {
    let app = app();
    let (status, body) = get(&app, "/books/author/1?sortOrder=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 1]);

    let (status, _) = get(&app, "/books/author/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/authors/2/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 4]);
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = get(&app(), "/books/stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["totalBooks"], 5);
    assert_eq!(stats["totalAuthors"], 3);
    assert_eq!(stats["publishedYearRange"], json!({ "earliest": 1934, "latest": 1998 }));
    assert_eq!(stats["averagePublishedYear"], 1978);
    assert_eq!(stats["booksByYear"]["1997"], 1);
    assert_eq!(stats["booksByAuthor"][0]["authorName"], "J.K. Rowling");
    assert_eq!(stats["booksByAuthor"][0]["count"], 2);
}

#[tokio::test]
async fn test_stats_on_empty_store() {
    let app = create_router(AppState::with_store(AppConfig::default(), Store::new()));
    let (status, body) = get(&app, "/books/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalBooks"], 0);
    assert_eq!(body["data"]["averagePublishedYear"], 0);
    assert_eq!(body["data"]["booksByYear"], json!({}));

    let (_, body) = get(&app, "/books").await;
    assert_eq!(body["pagination"]["totalPages"], 0);
    assert_eq!(body["pagination"]["hasNext"], false);
    assert_eq!(body["pagination"]["hasPrev"], false);
}

#[tokio::test]
async fn test_create_update_delete_book() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "title": "  Death on the Nile ",
            "isbn": "978-0-00-711926-4",
            "publishedYear": 1937,
            "authorId": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book created successfully");
    assert_eq!(body["data"]["id"], 6);
    assert_eq!(body["data"]["title"], "Death on the Nile");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/books/6",
        Some(json!({
            "title": "Death on the Nile",
            "isbn": "978-0-00-711926-4",
            "publishedYear": 1938,
            "authorId": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["publishedYear"], 1938);

    let (status, body) = send(&app, Method::DELETE, "/books/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 6);

    let (status, _) = get(&app, "/books/6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_book_rejections() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "title": "Copycat",
            "isbn": " 978-0-7475-3269-9 ",
            "publishedYear": 2001,
            "authorId": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["errorCode"], "CONFLICT");

    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "title": "Ghost",
            "isbn": "978-1-00-000000-1",
            "publishedYear": 2001,
            "authorId": 99
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Author with id 99 not found");

    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "title": "Bad",
            "isbn": "not-an-isbn",
            "publishedYear": 999,
            "authorId": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["errorCode"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["method"], "POST");
    let message = body["error"]["message"].as_str().expect("No message");
    assert!(message.contains("Invalid ISBN format"));
    assert!(message.contains("Published year must be between 1000"));
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/authors")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_author_lifecycle_and_id_reuse() {
    let app = app();
    let author = json!({
        "name": "Terry Pratchett",
        "email": "terry@example.com",
        "bio": "Discworld."
    });

    let (status, body) = send(&app, Method::POST, "/authors", Some(author.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 4);

    let (status, _) = send(&app, Method::POST, "/authors", Some(author.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, "/authors/4", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/authors", Some(author)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 4);
}

#[tokio::test]
async fn test_update_author() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/authors/3",
        Some(json!({
            "name": "Dame Agatha Christie",
            "email": "agatha.christie@example.com",
            "bio": "Queen of Crime."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 3);
    assert_eq!(body["data"]["name"], "Dame Agatha Christie");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/authors/3",
        Some(json!({ "name": "X", "email": "bad", "bio": "Y" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_author_orphans_books() {
    let app = app();
    let (status, _) = send(&app, Method::DELETE, "/authors/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["authorId"], 1);

    let (status, _) = get(&app, "/authors/1/books").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/books/stats").await;
    assert_eq!(body["data"]["totalBooks"], 5);
    assert_eq!(body["data"]["booksByAuthor"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_list_authors() {
    let (status, body) = get(&app(), "/authors?sortBy=name").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 1, 2]);
    assert_eq!(body["pagination"]["total"], 3);
}
