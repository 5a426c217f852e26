//! HTTP surface for the calculation API.
//!
//! Handlers own the dispatcher-side validation: they normalize the state
//! code, reject malformed input with the service's long-standing message
//! strings, and map domain errors onto client-error statuses.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::registry::{self, StateCode};
use super::{calculate, rules, BenefitError};

/// Router exposing the calculation and rules-lookup endpoints.
pub fn benefit_router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rules/:state_code", get(rules_handler))
        .route("/states", get(states_handler))
}

#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub state_code: String,
    pub quarterly_earnings: Vec<f64>,
}

pub(crate) async fn calculate_handler(Json(request): Json<CalculationRequest>) -> Response {
    match calculate(&request.state_code, &request.quarterly_earnings) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(BenefitError::UnknownState { code }) => {
            let payload = json!({
                "error": format!(
                    "State {code} not supported. Supported states: {}",
                    registry::supported_states().join(", ")
                ),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(BenefitError::InsufficientQuarters { .. }) => {
            let payload = json!({
                "error": "At least 4 quarters of earnings are required",
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(BenefitError::NegativeEarnings) => {
            let payload = json!({
                "error": "Earnings cannot be negative",
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn rules_handler(Path(state_code): Path<String>) -> Response {
    let normalized = state_code.trim().to_ascii_uppercase();
    match StateCode::parse(&normalized) {
        Some(code) => (StatusCode::OK, Json(rules::state_rule(code))).into_response(),
        None => {
            let payload = json!({
                "error": format!("Rules for state {normalized} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn states_handler() -> Json<serde_json::Value> {
    let states = registry::supported_states();
    Json(json!({
        "supported_states": states,
        "count": states.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn calculate_handler_returns_results() {
        let request = CalculationRequest {
            state_code: "wa".to_string(),
            quarterly_earnings: vec![30_000.0, 30_000.0, 30_000.0, 30_000.0],
        };

        let response = calculate_handler(Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn calculate_handler_names_supported_states_on_unknown_code() {
        let request = CalculationRequest {
            state_code: "zz".to_string(),
            quarterly_earnings: vec![1000.0, 1000.0, 1000.0, 1000.0],
        };

        let response = calculate_handler(Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rules_handler_is_not_found_for_unknown_states() {
        let response = rules_handler(Path("zz".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rules_handler_normalizes_case() {
        let response = rules_handler(Path("fl".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
