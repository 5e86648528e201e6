use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Signup body as posted by the landing page form.
///
/// Only `email` is required. `role` and `lang` accept any JSON value and are
/// coerced during normalization, so a stray value never fails deserialization.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub name: Option<String>,
    #[schema(value_type = String, example = "anna@example.com")]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>, example = "employer")]
    pub role: Option<Value>,
    #[schema(value_type = Option<String>, example = "pl")]
    pub lang: Option<Value>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    pub fn normalize(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("employer") => Role::Employer,
            _ => Role::Candidate,
        }
    }
}

/// Submission language. Only `en` and `pl` are recognized here, so a `uk`
/// submission from the page is recorded as `en`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Pl,
}

impl Lang {
    pub fn normalize(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("pl") => Lang::Pl,
            _ => Lang::En,
        }
    }
}

/// Request metadata taken from headers at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMeta {
    pub user_agent: String,
    pub ip: String,
}

impl ClientMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = header_str(headers, header::USER_AGENT.as_str())
            .unwrap_or_default()
            .to_string();
        let ip = header_str(headers, "x-real-ip")
            .or_else(|| header_str(headers, "x-forwarded-for"))
            .unwrap_or_default()
            .to_string();
        Self { user_agent, ip }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// Body relayed to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub lang: Lang,
    pub created_at: String,
    pub user_agent: String,
    pub ip: String,
}
