use std::env;
use std::fs;
use std::path::Path;

use custform_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

struct Entry {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = config_file_path.as_deref().and_then(load_config_file_doc);

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for entry in entries(&config) {
        let source = field_source(&entry, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(format!("- {} = {} (source: {source})", entry.key_path, entry.value));
    }
    lines.join("\n")
}

fn entries(config: &AppConfig) -> Vec<Entry> {
    let storage = &config.storage;
    vec![
        Entry {
            key_path: "storage.backend",
            env_keys: &["CUSTFORM_STORAGE_BACKEND"],
            value: format!("{:?}", storage.backend).to_ascii_lowercase(),
        },
        Entry {
            key_path: "storage.url",
            env_keys: &["CUSTFORM_STORAGE_URL"],
            value: storage.url.clone(),
        },
        Entry {
            key_path: "storage.key",
            env_keys: &["CUSTFORM_STORAGE_KEY"],
            value: storage.key.clone(),
        },
        Entry {
            key_path: "storage.max_connections",
            env_keys: &["CUSTFORM_STORAGE_MAX_CONNECTIONS"],
            value: storage.max_connections.to_string(),
        },
        Entry {
            key_path: "storage.timeout_secs",
            env_keys: &["CUSTFORM_STORAGE_TIMEOUT_SECS"],
            value: storage.timeout_secs.to_string(),
        },
        Entry {
            key_path: "logging.level",
            env_keys: &["CUSTFORM_LOGGING_LEVEL", "CUSTFORM_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Entry {
            key_path: "logging.format",
            env_keys: &["CUSTFORM_LOGGING_FORMAT", "CUSTFORM_LOG_FORMAT"],
            value: format!("{:?}", config.logging.format).to_ascii_lowercase(),
        },
    ]
}

fn load_config_file_doc(path: &Path) -> Option<Value> {
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    entry: &Entry,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = entry.env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, entry.key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
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
