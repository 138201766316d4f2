use printadvisor_core::catalog::{Catalog, CatalogAudit, TableCoverage};
use printadvisor_core::config::{AppConfig, LoadOptions};

use crate::commands::{escape_json, CommandResult, EXIT_CATALOG, EXIT_CONFIG};

/// Reports coverage for both tables and every key where they disagree.
/// Divergence is informational: the tables are authored independently.
pub fn run(json_output: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "catalog",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            )
        }
    };

    let catalog = match Catalog::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_load", error.to_string(), EXIT_CATALOG)
        }
    };

    let audit = catalog.audit();
    let output = if json_output {
        serde_json::to_string_pretty(&audit).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"catalog\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&audit)
    };

    CommandResult { exit_code: 0, output }
}

fn render_human(audit: &CatalogAudit) -> String {
    let mut lines = Vec::new();
    render_coverage(&mut lines, "QuizContinue", &audit.standard);
    render_coverage(&mut lines, "QuizContinueA", &audit.alternate);

    lines.push(format!("divergent keys: {}", audit.divergences.len()));
    for divergence in &audit.divergences {
        lines.push(format!(
            "- {}: [{}] vs [{}]",
            divergence.key,
            divergence.standard_products.join(", "),
            divergence.alternate_products.join(", ")
        ));
    }

    lines.join("\n")
}

fn render_coverage(lines: &mut Vec<String>, intent_name: &str, coverage: &TableCoverage) {
    let marker = if coverage.is_complete() { "ok" } else { "incomplete" };
    lines.push(format!(
        "{intent_name} ({}): {} entries, {} missing [{marker}]",
        coverage.origin,
        coverage.entries,
        coverage.missing.len()
    ));
    for key in &coverage.missing {
        lines.push(format!("  - missing {key}"));
    }
}
