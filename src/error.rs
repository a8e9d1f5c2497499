use crate::clients::ClientError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCORING_FAILED_MESSAGE: &str = "Failed to process transaction";
pub const FEEDBACK_FAILED_MESSAGE: &str = "Failed to submit feedback";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Why a request ended in the generic 500. Never shown to the caller.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("unreadable request body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caller payload is unusable. The message is returned to the caller as-is.
    #[error("{0}")]
    Validation(String),

    /// The body could not be read, or the scoring service could not be
    /// reached or answered badly. Only `message` leaves the process.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: FailureCause,
    },
}

impl GatewayError {
    pub fn scoring(source: impl Into<FailureCause>) -> Self {
        Self::Upstream {
            message: SCORING_FAILED_MESSAGE,
            source: source.into(),
        }
    }

    pub fn feedback(source: impl Into<FailureCause>) -> Self {
        Self::Upstream {
            message: FEEDBACK_FAILED_MESSAGE,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let error = match self {
            Self::Validation(message) => message.clone(),
            Self::Upstream { message, .. } => message.to_string(),
        };
        ErrorEnvelope { error }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}
