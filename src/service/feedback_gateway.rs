use crate::clients::FeedbackService;
use crate::domain::feedback::{FeedbackAck, FeedbackSubmission};
use crate::error::GatewayError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct FeedbackGateway {
    pub client: Arc<dyn FeedbackService>,
}

impl FeedbackGateway {
    #[tracing::instrument(
        name = "submit_feedback",
        skip_all,
        fields(request_id = %Uuid::new_v4())
    )]
    pub async fn submit(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackAck, GatewayError> {
        let payload = submission.validate().map_err(|e| {
            tracing::warn!(error = %e, "feedback rejected");
            e
        })?;

        tracing::info!(
            transaction_id = %payload.transaction_id,
            actual_is_fraud = payload.actual_is_fraud,
            "forwarding feedback"
        );

        self.client.submit(&payload).await.map_err(|e| {
            tracing::error!(
                transaction_id = %payload.transaction_id,
                error = %e,
                "error submitting feedback"
            );
            GatewayError::feedback(e)
        })?;

        Ok(FeedbackAck::default())
    }
}
