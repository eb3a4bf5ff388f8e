use crate::error::{ChatError, ChatResult};
use crate::history::DEFAULT_STORAGE_KEY;
use std::collections::HashMap;
use std::time::Duration;

/// Bundled config for builds without a process environment (web, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_ENDPOINT: &str = "https://superb-fernanda-nextflow-37cec34f.koyeb.app/o3mini";
pub const DEFAULT_TITLE: &str = "AI Assistant";

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub storage_key: String,
    pub title: String,
    /// `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: None,
        }
    }
}

impl WidgetConfig {
    /// Bundled defaults, overridden by `.env` and the process environment where available.
    pub fn load() -> ChatResult<Self> {
        let mut values = parse_env_file(BUNDLED_CONFIG);
        load_process_env(&mut values);
        Self::from_values(&values)
    }

    pub fn from_values(values: &HashMap<String, String>) -> ChatResult<Self> {
        let mut config = Self::default();
        if let Some(endpoint) = non_empty(values, "BUBBLECHAT_ENDPOINT") {
            config.endpoint = endpoint.to_string();
        }
        if let Some(key) = non_empty(values, "BUBBLECHAT_STORAGE_KEY") {
            config.storage_key = key.to_string();
        }
        if let Some(title) = non_empty(values, "BUBBLECHAT_TITLE") {
            config.title = title.to_string();
        }
        if let Some(raw) = non_empty(values, "BUBBLECHAT_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                ChatError::Config(format!("BUBBLECHAT_TIMEOUT_SECS must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = (secs > 0).then_some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn non_empty<'a>(values: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    values
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Parse `KEY=VALUE` lines, skipping comments and empty lines.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"');
            values.insert(key.trim().to_string(), value.to_string());
        }
    }
    values
}

#[cfg(not(target_arch = "wasm32"))]
fn load_process_env(values: &mut HashMap<String, String>) {
    // Desktop dev: pick up a local .env first
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        tracing::warn!("ignoring unreadable .env: {err}");
    }
    for (key, value) in std::env::vars() {
        if key.starts_with("BUBBLECHAT_") {
            values.insert(key, value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_process_env(_values: &mut HashMap<String, String>) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = WidgetConfig::from_values(&HashMap::new()).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.storage_key, "chatMessages");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn overrides_and_blank_values() {
        let config = WidgetConfig::from_values(&values(&[
            ("BUBBLECHAT_ENDPOINT", "http://localhost:8080/chat"),
            ("BUBBLECHAT_STORAGE_KEY", "  "),
            ("BUBBLECHAT_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/chat");
        assert_eq!(config.storage_key, "chatMessages");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn bad_timeout_is_a_config_error() {
        let err = WidgetConfig::from_values(&values(&[("BUBBLECHAT_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn parses_env_file_lines() {
        let parsed = parse_env_file("# comment\n\nBUBBLECHAT_TITLE = \"Support\"\nnoise\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["BUBBLECHAT_TITLE"], "Support");
    }

    #[test]
    fn bundled_config_is_valid() {
        assert!(WidgetConfig::from_values(&parse_env_file(BUNDLED_CONFIG)).is_ok());
    }
}
