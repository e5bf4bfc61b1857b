pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod utils;

use axum::{http::HeaderValue, middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub questions_per_page: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::questions::routes())
        .merge(handlers::categories::routes())
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

/// Attach the CORS headers the catalog frontend expects to every response.
async fn cors_headers(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let mut res = next.run(req).await;
    let headers = res.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,true"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,PUT,POST,DELETE,OPTIONS"),
    );
    res
}
