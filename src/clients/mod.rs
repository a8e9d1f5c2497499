use crate::domain::feedback::FeedbackPayload;
use crate::domain::transaction::{TransactionSubmission, UpstreamVerdict};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub mod feedback;
pub mod health;
pub mod verdict;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, timeouts included.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream returned HTTP {status}")]
    Http { status: u16, body: String },

    #[error("undecodable upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

#[async_trait::async_trait]
pub trait VerdictService: Send + Sync {
    async fn predict(
        &self,
        submission: &TransactionSubmission,
    ) -> Result<UpstreamVerdict, ClientError>;
}

#[async_trait::async_trait]
pub trait FeedbackService: Send + Sync {
    async fn submit(&self, payload: &FeedbackPayload) -> Result<(), ClientError>;
}

/// Shared transport for calls to the scoring service. The base URL is fixed at
/// construction; every request carries the same bounded timeout.
#[derive(Clone)]
pub struct UpstreamHttp {
    pub base_url: String,
    pub timeout: Duration,
    pub client: reqwest::Client,
}

impl UpstreamHttp {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POSTs `payload` as JSON and returns the body of a 2xx response.
    pub async fn send<P>(&self, path: &str, payload: &P) -> Result<Vec<u8>, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let resp = self
            .client
            .post(self.url(path))
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ClientError::Network)?;
        read_success_body(resp).await
    }

    pub async fn get(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let resp = self
            .client
            .get(self.url(path))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ClientError::Network)?;
        read_success_body(resp).await
    }
}

async fn read_success_body(resp: reqwest::Response) -> Result<Vec<u8>, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Http {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        });
    }
    let bytes = resp.bytes().await.map_err(ClientError::Network)?;
    Ok(bytes.to_vec())
}
