use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const AMOUNT_KEYS: [&str; 2] = ["Amount", "amount"];

/// Caller-defined transaction record. Fields are opaque to the gateway and are
/// forwarded to the scorer as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionSubmission(pub Map<String, Value>);

impl TransactionSubmission {
    /// The submission's `id`, echoed back on the verdict. `None` when the key is absent.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn id_for_log(&self) -> String {
        match self.id() {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<none>".to_string(),
        }
    }

    /// Prefixes `marker` onto a string amount that doesn't already carry it.
    pub fn apply_currency_marker(&mut self, marker: &str) {
        for key in AMOUNT_KEYS {
            if let Some(Value::String(amount)) = self.0.get_mut(key) {
                let trimmed = amount.trim();
                if !trimmed.is_empty() && !trimmed.starts_with(marker) {
                    *amount = format!("{marker}{trimmed}");
                }
            }
        }
    }
}

/// Verdict returned by the scoring service.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamVerdict {
    #[serde(alias = "is_fraud")]
    pub fraud_prediction: bool,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Value>,
    pub is_fraud: bool,
    pub timestamp: String,
}

impl VerdictResult {
    pub fn new(
        submission: &TransactionSubmission,
        verdict: &UpstreamVerdict,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            transaction_id: submission.id().cloned(),
            is_fraud: verdict.fraud_prediction,
            timestamp: iso_timestamp(at),
        }
    }
}

/// `2024-05-01T12:30:00.123Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
