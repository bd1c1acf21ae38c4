use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use capture_session::CaptureError;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};

use super::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/start-capture", get(start_capture_handler))
        .route("/stop-capture", get(stop_capture_handler))
        .route("/fetch-actions", get(fetch_actions_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

#[derive(Debug, Deserialize)]
struct StartQuery {
    url: Option<String>,
}

async fn start_capture_handler(
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Response {
    match state.session.start(query.url.as_deref()).await {
        Ok(target) => Json(json!({
            "message": format!("Capture started on {target}. Perform actions in the browser."),
        }))
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn stop_capture_handler(State(state): State<AppState>) -> Response {
    match state.session.stop().await {
        Ok(actions) => Json(json!({
            "message": "Capture stopped successfully.",
            "actions": actions,
        }))
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn fetch_actions_handler(State(state): State<AppState>) -> Response {
    match state.session.fetch() {
        Ok(actions) => Json(actions).into_response(),
        Err(err) => error_response(err),
    }
}

async fn health_handler(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "ok",
        "state": state.session.state().name(),
    }))
    .into_response()
}

fn error_response(err: CaptureError) -> Response {
    let status = match &err {
        CaptureError::NoActiveSession => StatusCode::BAD_REQUEST,
        CaptureError::NoActionsYet => StatusCode::NOT_FOUND,
        CaptureError::StartFailed { .. } | CaptureError::Locator(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        error!(target: "capturekit", %err, "capture request failed");
    } else {
        warn!(target: "capturekit", %err, "capture request rejected");
    }

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
