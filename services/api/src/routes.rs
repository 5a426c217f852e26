use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use benefitpath::benefits::registry;
use benefitpath::benefits::router::benefit_router;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;

/// Operational endpoints layered over the core calculation router.
pub(crate) fn with_service_routes() -> axum::Router {
    benefit_router()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceInfo {
    pub(crate) service: &'static str,
    pub(crate) version: &'static str,
    pub(crate) supported_states: Vec<&'static str>,
}

pub(crate) async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "BenefitPath Calculator",
        version: env!("CARGO_PKG_VERSION"),
        supported_states: registry::supported_states(),
    })
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn ready(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.readiness.load(Ordering::Acquire) {
        true => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        false => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        ),
    }
}

pub(crate) async fn metrics(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let exposition = state.metrics.render();
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        exposition,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn service_info_announces_supported_states() {
        let Json(info) = service_info().await;
        assert_eq!(info.service, "BenefitPath Calculator");
        assert_eq!(info.supported_states, ["CA", "TX", "NY", "FL", "WA", "WY"]);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn calculation_routes_are_mounted() {
        let request = Request::post("/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({
                    "state_code": "TX",
                    "quarterly_earnings": [14000, 14000, 14000, 14000],
                }))
                .unwrap(),
            ))
            .unwrap();

        let response = with_service_routes()
            .oneshot(request)
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
