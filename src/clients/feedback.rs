use crate::clients::{ClientError, FeedbackService, UpstreamHttp};
use crate::domain::feedback::FeedbackPayload;

pub const FEEDBACK_PATH: &str = "/feedback";

pub struct FeedbackClient {
    pub http: UpstreamHttp,
}

#[async_trait::async_trait]
impl FeedbackService for FeedbackClient {
    async fn submit(&self, payload: &FeedbackPayload) -> Result<(), ClientError> {
        // acknowledgment only, the body carries nothing we use
        self.http.send(FEEDBACK_PATH, payload).await?;
        Ok(())
    }
}
