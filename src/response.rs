use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for the service's own endpoints. Waitlist responses use the flat
/// shape the signup form expects instead.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}
