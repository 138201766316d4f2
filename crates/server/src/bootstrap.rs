use std::sync::Arc;

use printadvisor_core::catalog::{Catalog, CatalogError};
use printadvisor_core::config::AppConfig;
use printadvisor_lex::FulfillmentHandler;
use thiserror::Error;
use tracing::{info, warn};

pub struct Application {
    pub config: AppConfig,
    pub handler: Arc<FulfillmentHandler>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("recommendation catalog failed to load: {0}")]
    Catalog(#[from] CatalogError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let catalog = Catalog::load(&config.catalog)?;
    let audit = catalog.audit();
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        standard_origin = %audit.standard.origin,
        standard_entries = audit.standard.entries,
        alternate_origin = %audit.alternate.origin,
        alternate_entries = audit.alternate.entries,
        divergent_keys = audit.divergences.len(),
        "recommendation catalog loaded"
    );
    if !audit.is_complete() {
        warn!(
            event_name = "system.bootstrap.catalog_incomplete",
            correlation_id = "bootstrap",
            standard_missing = audit.standard.missing.len(),
            alternate_missing = audit.alternate.missing.len(),
            "recommendation catalog does not cover every answer combination"
        );
    }

    let handler = FulfillmentHandler::from_catalog(catalog, config.bot.timezone.clone());
    info!(
        event_name = "system.bootstrap.ready",
        correlation_id = "bootstrap",
        timezone = %handler.timezone(),
        "fulfillment handler initialized"
    );

    Ok(Application { config, handler: Arc::new(handler) })
}
