pub mod analysis;
pub mod candles;
pub mod health;

use crate::error::AppError;
use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Trading System API is running",
    })
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(health::router())
        .nest("/api", analysis::router().merge(candles::router()))
}

/// Trimmed, non-empty symbol from a query parameter.
pub(crate) fn require_symbol(symbol: Option<&str>) -> Result<String, AppError> {
    match symbol.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(AppError::BadRequest("symbol query parameter is required".to_string())),
    }
}
