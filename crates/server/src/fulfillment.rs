use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use printadvisor_lex::LexEvent;
use serde::Serialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::app::AppState;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    pub error: String,
    pub correlation_id: String,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/fulfillment", post(fulfill)).with_state(state)
}

/// Fulfillment failures still answer 200 with a `Close`/`Failed` dialog
/// action; only a body that is not a code hook event is rejected.
pub async fn fulfill(
    State(state): State<AppState>,
    payload: Result<Json<LexEvent>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!("fulfillment", correlation_id = %correlation_id);
    let _entered = span.enter();

    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            warn!(
                event_name = "fulfillment.rejected",
                correlation_id = %correlation_id,
                error = %rejection,
                "request body is not a code hook event"
            );
            let status = rejection.status();
            let body = RejectedEvent {
                error: rejection.body_text(),
                correlation_id: correlation_id.clone(),
            };
            return (status, [(CORRELATION_HEADER, correlation_id)], Json(body)).into_response();
        }
    };

    let response = state.handler.respond(&event);
    info!(
        event_name = "fulfillment.completed",
        correlation_id = %correlation_id,
        intent_name = event.intent_name(),
        dialog_action = response.dialog_action.kind(),
        "code hook event answered"
    );

    (StatusCode::OK, [(CORRELATION_HEADER, correlation_id)], Json(response)).into_response()
}
