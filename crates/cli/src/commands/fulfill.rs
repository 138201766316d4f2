use std::fs;
use std::io::{self, Read};
use std::path::Path;

use printadvisor_core::catalog::Catalog;
use printadvisor_core::config::{AppConfig, LoadOptions};
use printadvisor_lex::{FulfillmentHandler, LexEvent};

use crate::commands::{CommandResult, EXIT_CATALOG, EXIT_CONFIG, EXIT_INPUT};

/// Reads an event from `path` (`-` is stdin) and prints the handler's response.
pub fn run(path: &Path) -> CommandResult {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };

    match raw {
        Ok(raw) => run_event(&raw),
        Err(error) => CommandResult::failure(
            "fulfill",
            "read_event",
            format!("could not read event `{}`: {error}", path.display()),
            EXIT_INPUT,
        ),
    }
}

pub fn run_event(raw: &str) -> CommandResult {
    let event = match serde_json::from_str::<LexEvent>(raw) {
        Ok(event) => event,
        Err(error) => {
            return CommandResult::failure(
                "fulfill",
                "invalid_event",
                format!("event is not a code hook payload: {error}"),
                EXIT_INPUT,
            )
        }
    };

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "fulfill",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            )
        }
    };

    let catalog = match Catalog::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("fulfill", "catalog_load", error.to_string(), EXIT_CATALOG)
        }
    };

    let handler = FulfillmentHandler::from_catalog(catalog, config.bot.timezone);
    let response = handler.respond(&event);

    match serde_json::to_string_pretty(&response) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => {
            CommandResult::failure("fulfill", "serialization", error.to_string(), EXIT_INPUT)
        }
    }
}
