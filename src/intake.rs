use anyhow::Context;
use async_trait::async_trait;
use axum::http::{StatusCode, header};

use crate::dto::waitlist::WaitlistPayload;

/// Status and raw body text returned by the intake endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
pub trait IntakeClient: Send + Sync {
    /// Issue a single POST of `payload` to `url`. Transport failures are
    /// errors; any HTTP status, success or not, is a reply.
    async fn forward(&self, url: &str, payload: &WaitlistPayload) -> anyhow::Result<UpstreamReply>;
}

#[derive(Clone, Default)]
pub struct HttpIntakeClient {
    client: reqwest::Client,
}

impl HttpIntakeClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntakeClient for HttpIntakeClient {
    async fn forward(&self, url: &str, payload: &WaitlistPayload) -> anyhow::Result<UpstreamReply> {
        let body = serde_json::to_vec(payload).context("serialize waitlist payload")?;
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("send waitlist payload to intake endpoint")?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .context("intake endpoint returned an invalid status")?;
        let body = response
            .text()
            .await
            .context("read intake endpoint response")?;

        Ok(UpstreamReply { status, body })
    }
}
