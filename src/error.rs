use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The candle series broke the input contract (ordering, duplicates, bad prices).
    #[error("Invalid candle series: {0}")]
    InvalidSeries(String),

    #[error("Insufficient data: need {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidSeries(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Reqwest(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::BadRequest(msg)
            | AppError::InvalidSeries(msg)
            | AppError::ExternalApi(msg) => msg.clone(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
