use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server not configured")]
    NotConfigured,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Upstream error")]
    Upstream { status: StatusCode, details: String },

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

/// Flat error body returned to the signup form.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::NotConfigured => {
                tracing::error!("waitlist upstream url is not configured");
            }
            AppError::Upstream { status: upstream, .. } => {
                tracing::warn!(upstream_status = %upstream, "intake endpoint rejected submission");
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "waitlist submission failed");
            }
            AppError::InvalidEmail => {}
        }

        let details = match &self {
            AppError::Upstream { details, .. } => Some(details.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
