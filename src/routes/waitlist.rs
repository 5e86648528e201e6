use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;

use crate::{
    dto::waitlist::{ClientMeta, WaitlistRequest},
    error::{AppError, AppResult, ErrorBody},
    services::waitlist_service::submit_signup,
    state::AppState,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(join_waitlist))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

#[utoipa::path(
    post,
    path = "/api/waitlist",
    request_body = WaitlistRequest,
    responses(
        (status = 200, description = "Signup relayed; body is `ok: true` merged with the intake endpoint's JSON", body = Object),
        (status = 400, description = "Invalid email", body = ErrorBody),
        (status = 500, description = "Server not configured, or server error", body = ErrorBody),
        (status = 502, description = "Intake endpoint rejected the signup", body = ErrorBody)
    ),
    tag = "Waitlist"
)]
pub async fn join_waitlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let body = body.map_err(|err| AppError::Internal(anyhow::Error::new(err)))?;
    let meta = ClientMeta::from_headers(&headers);
    let ack = submit_signup(
        state.upstream_url.as_deref(),
        state.intake.as_ref(),
        &body,
        meta,
        Utc::now(),
    )
    .await?;

    Ok((
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(ack),
    )
        .into_response())
}
