use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::ApiResponse, state::AppState};

pub mod doc;
pub mod health;
pub mod waitlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new().merge(waitlist::router())
}

/// Full application router: health probe, API, docs and the JSON 404 fallback.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success("Not Found", serde_json::json!({ "path": uri.path() }));
    (StatusCode::NOT_FOUND, Json(body))
}
