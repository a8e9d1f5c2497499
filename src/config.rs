use std::time::Duration;

pub const DEFAULT_FRAUD_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Base URL of the external scoring service, without a trailing slash.
    pub fraud_service_url: String,
    pub fraud_service_timeout_ms: u64,
    pub amount_currency_marker: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fraud_service_url = lookup("FRAUD_SERVICE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_base_url(&s))
            .unwrap_or_else(|| DEFAULT_FRAUD_SERVICE_URL.to_string());

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            fraud_service_url,
            fraud_service_timeout_ms: lookup("FRAUD_SERVICE_TIMEOUT_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            amount_currency_marker: lookup("AMOUNT_CURRENCY_MARKER").filter(|s| !s.is_empty()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.fraud_service_timeout_ms)
    }
}

// Older deployments pointed FRAUD_SERVICE_URL straight at the predict endpoint.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    trimmed
        .strip_suffix("/predict")
        .unwrap_or(trimmed)
        .trim_end_matches('/')
        .to_string()
}
