use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use printadvisor_core::catalog::TableCoverage;
use printadvisor_core::quiz::QuizFlow;
use serde::Serialize;

use crate::app::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlowHealth {
    pub flow: QuizFlow,
    pub intent_name: &'static str,
    pub origin: String,
    pub entries: usize,
    pub missing_keys: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub flows: Vec<FlowHealth>,
    pub timezone: String,
    pub checked_at: String,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let flows: Vec<FlowHealth> = QuizFlow::ALL
        .into_iter()
        .map(|flow| {
            let coverage = TableCoverage::of(state.handler.pipeline(flow).source());
            FlowHealth {
                flow,
                intent_name: flow.intent_name(),
                origin: coverage.origin,
                entries: coverage.entries,
                missing_keys: coverage.missing.len(),
            }
        })
        .collect();
    let ready = flows.iter().all(|flow| flow.missing_keys == 0);

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        flows,
        timezone: state.handler.timezone().to_string(),
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use printadvisor_core::catalog::{embedded_table, Catalog, RecommendationTable};
    use printadvisor_core::quiz::QuizFlow;
    use printadvisor_lex::FulfillmentHandler;

    use crate::app::AppState;
    use crate::health::health;

    #[tokio::test]
    async fn health_returns_ready_when_catalog_is_complete() {
        let handler = FulfillmentHandler::from_catalog(
            Catalog::embedded().expect("embedded catalog"),
            "America/New_York",
        );

        let (status, Json(payload)) = health(State(AppState { handler: Arc::new(handler) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.timezone, "America/New_York");
        assert_eq!(payload.flows.len(), 2);
        assert_eq!(payload.flows[0].intent_name, "QuizContinue");
        assert_eq!(payload.flows[0].entries, 36);
        assert_eq!(payload.flows[1].origin, "embedded:QuizContinueA");
        assert!(!payload.checked_at.is_empty());
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_when_a_table_has_gaps() {
        let partial =
            RecommendationTable::from_toml_str("partial", "").expect("empty table parses");
        let catalog = Catalog::new(
            embedded_table(QuizFlow::Standard).expect("standard table"),
            partial,
        );
        let handler = FulfillmentHandler::from_catalog(catalog, "UTC");

        let (status, Json(payload)) = health(State(AppState { handler: Arc::new(handler) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.flows[1].missing_keys, 36);
        assert_eq!(payload.timezone, "UTC");
    }
}
