use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::CATEGORIES_URL, get(list_categories))
}

#[derive(Serialize)]
struct CategoryListResponse {
    success: bool,
    categories: Vec<String>,
    total_categories: usize,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state
        .db
        .category_names()
        .await
        .reject("failed to list categories")?;

    Ok(Json(CategoryListResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}
