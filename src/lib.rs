pub mod clients;
pub mod config;
pub mod domain {
    pub mod feedback;
    pub mod transaction;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod feedback;
        pub mod ops;
        pub mod transactions;
    }
}
pub mod service {
    pub mod feedback_gateway;
    pub mod scoring_gateway;
}

use axum::routing::{get, post};
use axum::Router;
use clients::feedback::FeedbackClient;
use clients::health::HealthClient;
use clients::verdict::VerdictClient;
use clients::UpstreamHttp;
use config::AppConfig;
use service::feedback_gateway::FeedbackGateway;
use service::scoring_gateway::ScoringGateway;
use std::sync::Arc;

pub const TRANSACTION_ROUTE: &str = "/api/transaction-route";
pub const FEEDBACK_ROUTE: &str = "/api/feedback";

#[derive(Clone)]
pub struct AppState {
    pub scoring_gateway: ScoringGateway,
    pub feedback_gateway: FeedbackGateway,
    pub health_client: HealthClient,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let http = UpstreamHttp::new(cfg.fraud_service_url.clone(), cfg.timeout());

        Self {
            scoring_gateway: ScoringGateway {
                verdicts: Arc::new(VerdictClient { http: http.clone() }),
                amount_currency_marker: cfg.amount_currency_marker.clone(),
            },
            feedback_gateway: FeedbackGateway {
                client: Arc::new(FeedbackClient { http: http.clone() }),
            },
            health_client: HealthClient { http },
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::ops::health))
        .route("/ops/readiness", get(http::handlers::ops::readiness))
        .route("/ops/liveness", get(http::handlers::ops::liveness))
        .route(
            TRANSACTION_ROUTE,
            post(http::handlers::transactions::score_transaction),
        )
        .route(FEEDBACK_ROUTE, post(http::handlers::feedback::submit_feedback))
        .with_state(state)
}
