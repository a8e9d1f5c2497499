use crate::clients::VerdictService;
use crate::domain::transaction::{TransactionSubmission, VerdictResult};
use crate::error::GatewayError;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

#[derive(Clone)]
pub struct ScoringGateway {
    pub verdicts: Arc<dyn VerdictService>,
    pub amount_currency_marker: Option<String>,
}

impl ScoringGateway {
    /// Forwards the submission to the scorer and reshapes its verdict. Every
    /// upstream failure becomes the same generic error.
    #[tracing::instrument(
        name = "score_transaction",
        skip_all,
        fields(request_id = %Uuid::new_v4(), transaction_id = %submission.id_for_log())
    )]
    pub async fn score(
        &self,
        mut submission: TransactionSubmission,
    ) -> Result<VerdictResult, GatewayError> {
        if let Some(marker) = &self.amount_currency_marker {
            submission.apply_currency_marker(marker);
        }

        let started = Instant::now();
        match self.verdicts.predict(&submission).await {
            Ok(verdict) => {
                let result = VerdictResult::new(&submission, &verdict, chrono::Utc::now());
                tracing::info!(
                    is_fraud = result.is_fraud,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "transaction scored"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    timeout = e.is_timeout(),
                    latency_ms = started.elapsed().as_millis() as u64,
                    "error processing transaction"
                );
                Err(GatewayError::scoring(e))
            }
        }
    }
}
