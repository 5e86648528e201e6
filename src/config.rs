use std::env;

pub const UPSTREAM_URL_VAR: &str = "WAITLIST_APPS_SCRIPT_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Intake endpoint submissions are relayed to. `None` is not a startup
    /// failure; the waitlist route reports it per request.
    pub upstream_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let upstream_url = env::var(UPSTREAM_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            upstream_url,
            host,
            port,
        })
    }
}
