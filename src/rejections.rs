use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced to API clients.
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Unprocessable(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Unprocessable(_) => "unprocessable",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::NotFound(msg) | AppError::Unprocessable(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.code(),
            "message": self.message(),
        }));
        (self.status(), body).into_response()
    }
}

/// Adapters from database-layer results to API errors.
pub trait ResultExt<T> {
    /// Log the underlying error and reject the request as unprocessable.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for color_eyre::Result<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Unprocessable(msg)
        })
    }
}
