use crate::clients::{ClientError, UpstreamHttp};

pub const HEALTH_PATH: &str = "/health";

#[derive(Clone)]
pub struct HealthClient {
    pub http: UpstreamHttp,
}

impl HealthClient {
    /// Succeeds when the scoring service answers its health endpoint with 2xx.
    pub async fn check(&self) -> Result<(), ClientError> {
        self.http.get(HEALTH_PATH).await.map(|_| ())
    }
}
