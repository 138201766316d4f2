use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use printadvisor_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let entries: [(&str, String, &[&str]); 8] = [
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["PRINTADVISOR_SERVER_BIND_ADDRESS"],
        ),
        ("server.port", config.server.port.to_string(), &["PRINTADVISOR_SERVER_PORT"]),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["PRINTADVISOR_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            &["PRINTADVISOR_LOGGING_LEVEL", "PRINTADVISOR_LOG_LEVEL"],
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format),
            &["PRINTADVISOR_LOGGING_FORMAT", "PRINTADVISOR_LOG_FORMAT"],
        ),
        (
            "catalog.standard_path",
            display_table_path(config.catalog.standard_path.as_deref()),
            &["PRINTADVISOR_CATALOG_STANDARD_PATH"],
        ),
        (
            "catalog.alternate_path",
            display_table_path(config.catalog.alternate_path.as_deref()),
            &["PRINTADVISOR_CATALOG_ALTERNATE_PATH"],
        ),
        ("bot.timezone", config.bot.timezone.clone(), &["PRINTADVISOR_BOT_TIMEZONE"]),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    lines.push(format!(
        "- config file: {}",
        config_file_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    ));
    for (key_path, value, env_keys) in entries {
        let source =
            field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(render_line(key_path, &value, source));
    }

    lines.join("\n")
}

fn display_table_path(path: Option<&Path>) -> String {
    path.map(|path| path.display().to_string()).unwrap_or_else(|| "<embedded>".to_string())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("config file"));
            return format!("file ({})", file_path.display());
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
