use crate::domain::feedback::FeedbackSubmission;
use crate::error::GatewayError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn submit_feedback(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let submission = match serde_json::from_slice::<FeedbackSubmission>(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!(error = %e, "error reading feedback body");
            return GatewayError::feedback(e).into_response();
        }
    };

    match state.feedback_gateway.submit(submission).await {
        Ok(ack) => (axum::http::StatusCode::OK, Json(ack)).into_response(),
        Err(e) => e.into_response(),
    }
}
