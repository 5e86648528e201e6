use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    dto::waitlist::{ClientMeta, Lang, Role, WaitlistPayload, WaitlistRequest},
    error::{AppError, AppResult},
    intake::IntakeClient,
};

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^([^\s@])+@([^\s@]+)\.[^\s@]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Validate and normalize a signup into the payload forwarded upstream.
pub fn build_payload(
    request: WaitlistRequest,
    meta: ClientMeta,
    now: DateTime<Utc>,
) -> AppResult<WaitlistPayload> {
    let email = match request.email {
        Some(Value::String(email)) if is_valid_email(&email) => email,
        _ => return Err(AppError::InvalidEmail),
    };

    Ok(WaitlistPayload {
        name: request.name.unwrap_or_default(),
        email,
        role: Role::normalize(request.role.as_ref()),
        lang: Lang::normalize(request.lang.as_ref()),
        created_at: request
            .created_at
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        user_agent: meta.user_agent,
        ip: meta.ip,
    })
}

/// `{ "ok": true }` spread with the upstream JSON body. Object keys are
/// copied as-is, arrays and strings contribute one key per index, and any
/// other body (including invalid JSON) contributes nothing.
pub fn acknowledgement(upstream_body: &str) -> Value {
    let mut ack = Map::new();
    ack.insert("ok".to_string(), Value::Bool(true));
    match serde_json::from_str::<Value>(upstream_body) {
        Ok(Value::Object(fields)) => ack.extend(fields),
        Ok(Value::Array(items)) => ack.extend(
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), item)),
        ),
        Ok(Value::String(text)) => ack.extend(
            text.chars()
                .enumerate()
                .map(|(idx, ch)| (idx.to_string(), Value::String(ch.to_string()))),
        ),
        _ => {}
    }
    Value::Object(ack)
}

/// Parse the inbound body. Only a JSON object is a signup; duplicate keys
/// keep the last value.
pub fn parse_request(body: &[u8]) -> anyhow::Result<WaitlistRequest> {
    let value: Value = serde_json::from_slice(body).context("parse waitlist request body")?;
    if !value.is_object() {
        anyhow::bail!("waitlist request body is not a JSON object");
    }
    serde_json::from_value(value).context("decode waitlist request fields")
}

pub async fn submit_signup(
    upstream_url: Option<&str>,
    intake: &dyn IntakeClient,
    body: &[u8],
    meta: ClientMeta,
    now: DateTime<Utc>,
) -> AppResult<Value> {
    let url = upstream_url.ok_or(AppError::NotConfigured)?;

    let request = parse_request(body)?;
    let payload = build_payload(request, meta, now)?;

    tracing::debug!(role = ?payload.role, lang = ?payload.lang, "forwarding waitlist signup");
    let reply = intake.forward(url, &payload).await?;

    if !reply.status.is_success() {
        return Err(AppError::Upstream {
            status: reply.status,
            details: reply.body,
        });
    }

    tracing::info!(upstream_status = %reply.status, "waitlist signup accepted");
    Ok(acknowledgement(&reply.body))
}
