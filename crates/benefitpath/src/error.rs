use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::benefits::BenefitError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Process-level error for the service binary and HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("calculation error: {0}")]
    Benefit(#[from] BenefitError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Bad calculator input is the client's fault; everything else is ours.
        let status = match self {
            AppError::Benefit(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
