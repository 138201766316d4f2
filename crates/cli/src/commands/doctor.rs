use printadvisor_core::catalog::{Catalog, TableCoverage};
use printadvisor_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

use crate::commands::{escape_json, CommandResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: format!(
                    "configuration loaded and validated (timezone `{}`)",
                    config.bot.timezone
                ),
            });
            checks.extend(check_catalog(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in ["catalog_load", "standard_table_coverage", "alternate_table_coverage"] {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_catalog(config: &AppConfig) -> Vec<DoctorCheck> {
    let catalog = match Catalog::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return vec![
                DoctorCheck {
                    name: "catalog_load",
                    status: CheckStatus::Fail,
                    details: error.to_string(),
                },
                DoctorCheck {
                    name: "standard_table_coverage",
                    status: CheckStatus::Skipped,
                    details: "skipped because the catalog did not load".to_string(),
                },
                DoctorCheck {
                    name: "alternate_table_coverage",
                    status: CheckStatus::Skipped,
                    details: "skipped because the catalog did not load".to_string(),
                },
            ];
        }
    };

    let audit = catalog.audit();
    vec![
        DoctorCheck {
            name: "catalog_load",
            status: CheckStatus::Pass,
            details: format!(
                "loaded `{}` and `{}`",
                audit.standard.origin, audit.alternate.origin
            ),
        },
        coverage_check("standard_table_coverage", &audit.standard),
        coverage_check("alternate_table_coverage", &audit.alternate),
    ]
}

fn coverage_check(name: &'static str, coverage: &TableCoverage) -> DoctorCheck {
    if coverage.is_complete() {
        return DoctorCheck {
            name,
            status: CheckStatus::Pass,
            details: format!("{} entries cover every answer combination", coverage.entries),
        };
    }

    let first_missing =
        coverage.missing.first().map(|key| key.to_string()).unwrap_or_default();
    DoctorCheck {
        name,
        status: CheckStatus::Fail,
        details: format!(
            "{} answer combinations have no entry (first: `{first_missing}`)",
            coverage.missing.len()
        ),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}
