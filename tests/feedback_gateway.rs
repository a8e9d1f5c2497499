use fraud_gateway::clients::feedback::FeedbackClient;
use fraud_gateway::clients::UpstreamHttp;
use fraud_gateway::domain::feedback::{
    FeedbackSubmission, FEEDBACK_RECEIVED_MESSAGE, MISSING_FIELDS_MESSAGE,
};
use fraud_gateway::error::FEEDBACK_FAILED_MESSAGE;
use fraud_gateway::service::feedback_gateway::FeedbackGateway;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(base_url: &str) -> FeedbackGateway {
    FeedbackGateway {
        client: Arc::new(FeedbackClient {
            http: UpstreamHttp::new(base_url, Duration::from_secs(2)),
        }),
    }
}

fn feedback(v: serde_json::Value) -> FeedbackSubmission {
    serde_json::from_value(v).unwrap()
}

#[tokio::test]
async fn forwards_snake_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(body_json(json!({"transaction_id": "T42", "actual_is_fraud": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Feedback recorded successfully",
            "rows_affected": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = gateway(&server.uri())
        .submit(feedback(json!({"transactionId": "T42", "actualIsFraud": true})))
        .await
        .unwrap();
    assert_eq!(ack.message, FEEDBACK_RECEIVED_MESSAGE);
}

#[tokio::test]
async fn false_label_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(body_json(json!({"transaction_id": "T10", "actual_is_fraud": false})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server.uri())
        .submit(feedback(json!({"transactionId": "T10", "actualIsFraud": false})))
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_fields_make_no_outbound_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gw = gateway(&server.uri());
    for body in [
        json!({"actualIsFraud": true}),
        json!({"transactionId": "T1"}),
        json!({}),
    ] {
        let err = gw.submit(feedback(body)).await.unwrap_err();
        assert_eq!(err.status().as_u16(), 400);
        assert_eq!(err.envelope().error, MISSING_FIELDS_MESSAGE);
    }
}

#[tokio::test]
async fn service_unavailable_is_generic_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway(&server.uri())
        .submit(feedback(json!({"transactionId": "T42", "actualIsFraud": true})))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 500);
    assert_eq!(err.envelope().error, FEEDBACK_FAILED_MESSAGE);
}
