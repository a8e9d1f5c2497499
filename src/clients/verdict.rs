use crate::clients::{ClientError, UpstreamHttp, VerdictService};
use crate::domain::transaction::{TransactionSubmission, UpstreamVerdict};

pub const PREDICT_PATH: &str = "/predict";

pub struct VerdictClient {
    pub http: UpstreamHttp,
}

#[async_trait::async_trait]
impl VerdictService for VerdictClient {
    async fn predict(
        &self,
        submission: &TransactionSubmission,
    ) -> Result<UpstreamVerdict, ClientError> {
        let body = self.http.send(PREDICT_PATH, submission).await?;
        let verdict: UpstreamVerdict = serde_json::from_slice(&body)?;
        tracing::debug!(
            fraud_prediction = verdict.fraud_prediction,
            confidence = ?verdict.confidence,
            "scorer verdict"
        );
        Ok(verdict)
    }
}
