use std::sync::Arc;

use crate::{
    config::AppConfig,
    intake::{HttpIntakeClient, IntakeClient},
};

#[derive(Clone)]
pub struct AppState {
    pub upstream_url: Option<Arc<str>>,
    pub intake: Arc<dyn IntakeClient>,
}

impl AppState {
    pub fn new(upstream_url: Option<String>, intake: Arc<dyn IntakeClient>) -> Self {
        Self {
            upstream_url: upstream_url.map(Arc::from),
            intake,
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::new(
            config.upstream_url.clone(),
            Arc::new(HttpIntakeClient::new(client)),
        ))
    }
}
