use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: transactionId and actualIsFraud";
pub const FEEDBACK_RECEIVED_MESSAGE: &str = "Feedback received successfully";

/// Fields stay untyped until `validate`, so a wrong JSON type is reported as a
/// missing field rather than as an unreadable body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub transaction_id: Option<Value>,
    #[serde(default)]
    pub actual_is_fraud: Option<Value>,
}

/// Wire shape expected by the scoring service's feedback endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub transaction_id: String,
    pub actual_is_fraud: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAck {
    pub message: String,
}

impl Default for FeedbackAck {
    fn default() -> Self {
        Self {
            message: FEEDBACK_RECEIVED_MESSAGE.to_string(),
        }
    }
}

impl FeedbackSubmission {
    pub fn new(transaction_id: &str, actual_is_fraud: bool) -> Self {
        Self {
            transaction_id: Some(Value::String(transaction_id.to_string())),
            actual_is_fraud: Some(Value::Bool(actual_is_fraud)),
        }
    }

    // `actualIsFraud: false` is a real label and must pass.
    pub fn validate(self) -> Result<FeedbackPayload, GatewayError> {
        match (self.transaction_id, self.actual_is_fraud) {
            (Some(Value::String(transaction_id)), Some(Value::Bool(actual_is_fraud)))
                if !transaction_id.is_empty() =>
            {
                Ok(FeedbackPayload {
                    transaction_id,
                    actual_is_fraud,
                })
            }
            _ => Err(GatewayError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}
