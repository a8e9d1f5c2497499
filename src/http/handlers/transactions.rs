use crate::domain::transaction::TransactionSubmission;
use crate::error::GatewayError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

// The body is parsed as JSON whatever the content type says.
pub async fn score_transaction(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let submission = match serde_json::from_slice::<TransactionSubmission>(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!(error = %e, "error reading transaction body");
            return GatewayError::scoring(e).into_response();
        }
    };

    match state.scoring_gateway.score(submission).await {
        Ok(verdict) => (axum::http::StatusCode::OK, Json(verdict)).into_response(),
        Err(e) => e.into_response(),
    }
}
