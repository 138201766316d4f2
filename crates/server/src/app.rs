use std::sync::Arc;

use axum::Router;
use printadvisor_lex::FulfillmentHandler;

use crate::{fulfillment, health};

/// Shared request state. The handler is immutable, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<FulfillmentHandler>,
}

pub fn router(state: AppState) -> Router {
    Router::new().merge(fulfillment::router(state.clone())).merge(health::router(state))
}
