use crate::backoff::Backoff;
use crate::labels::Locale;
use crate::log::MAX_CAPACITY;
use crate::USER_REFRESH_NAMESPACE;
use tracing::warn;

pub const HTTP_SERVER_VAR: &str = "CRUD_HTTP_SERVER";
pub const WS_NAMESPACE_VAR: &str = "CRUD_WS_NAMESPACE";
pub const LOCALE_VAR: &str = "CRUD_LOCALE";
pub const RECONNECT_BASE_MS_VAR: &str = "CRUD_RECONNECT_BASE_MS";
pub const RECONNECT_MAX_MS_VAR: &str = "CRUD_RECONNECT_MAX_MS";
pub const CSRF_TOKEN_VAR: &str = "CRUD_CSRF_TOKEN";
pub const LOG_CAPACITY_VAR: &str = "CRUD_LOG_CAPACITY";

const DEFAULT_HTTP_SERVER: &str = "http://localhost:5001";
const DEFAULT_LOG_CAPACITY: usize = 200;

/// Widget settings.
///
/// A browser tab has no process environment, so every variable can also be
/// baked in when the crate is compiled (`CRUD_LOCALE=en dx build ...`).
/// A runtime value, where one exists, wins over the baked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin used when the app is not running inside a browser page.
    pub http_server: String,
    pub namespace: String,
    pub locale: Locale,
    pub backoff: Backoff,
    pub csrf_token: Option<String>,
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| build_time_value(key).map(str::to_string))
        })
    }

    /// Builds the settings from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_server = lookup(HTTP_SERVER_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string());
        let namespace = lookup(WS_NAMESPACE_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| USER_REFRESH_NAMESPACE.to_string());

        let locale = lookup(LOCALE_VAR)
            .and_then(|value| {
                value
                    .parse::<Locale>()
                    .map_err(|e| warn!("Ignoring {}: {}", LOCALE_VAR, e))
                    .ok()
            })
            .unwrap_or_default();

        let defaults = Backoff::default();
        let base_ms = parse_u64(RECONNECT_BASE_MS_VAR, lookup(RECONNECT_BASE_MS_VAR))
            .unwrap_or(defaults.base_delay_ms());
        let max_ms = parse_u64(RECONNECT_MAX_MS_VAR, lookup(RECONNECT_MAX_MS_VAR))
            .unwrap_or(defaults.max_delay_ms());

        let log_capacity = parse_u64(LOG_CAPACITY_VAR, lookup(LOG_CAPACITY_VAR))
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX).min(MAX_CAPACITY))
            .unwrap_or(DEFAULT_LOG_CAPACITY);

        Self {
            http_server,
            namespace,
            locale,
            backoff: Backoff::new(base_ms, max_ms),
            csrf_token: lookup(CSRF_TOKEN_VAR).filter(|t| !t.is_empty()),
            log_capacity,
        }
    }
}

fn build_time_value(key: &str) -> Option<&'static str> {
    match key {
        HTTP_SERVER_VAR => option_env!("CRUD_HTTP_SERVER"),
        WS_NAMESPACE_VAR => option_env!("CRUD_WS_NAMESPACE"),
        LOCALE_VAR => option_env!("CRUD_LOCALE"),
        RECONNECT_BASE_MS_VAR => option_env!("CRUD_RECONNECT_BASE_MS"),
        RECONNECT_MAX_MS_VAR => option_env!("CRUD_RECONNECT_MAX_MS"),
        CSRF_TOKEN_VAR => option_env!("CRUD_CSRF_TOKEN"),
        LOG_CAPACITY_VAR => option_env!("CRUD_LOG_CAPACITY"),
        _ => None,
    }
}

fn parse_u64(key: &str, raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} is not a number: {}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http_server, "http://localhost:5001");
        assert_eq!(config.namespace, "/websocket/user_refresh");
        assert_eq!(config.locale, Locale::ZhCn);
        assert_eq!(config.backoff, Backoff::default());
        assert_eq!(config.csrf_token, None);
        assert_eq!(config.log_capacity, 200);
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = config_from(&[
            ("CRUD_HTTP_SERVER", "https://admin.example.com"),
            ("CRUD_WS_NAMESPACE", "/ws/users"),
            ("CRUD_LOCALE", "en"),
            ("CRUD_RECONNECT_BASE_MS", "250"),
            ("CRUD_RECONNECT_MAX_MS", "8000"),
            ("CRUD_CSRF_TOKEN", "token-123"),
            ("CRUD_LOG_CAPACITY", "50"),
        ]);

        assert_eq!(config.http_server, "https://admin.example.com");
        assert_eq!(config.namespace, "/ws/users");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.backoff, Backoff::new(250, 8_000));
        assert_eq!(config.csrf_token.as_deref(), Some("token-123"));
        assert_eq!(config.log_capacity, 50);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CRUD_LOCALE", "fr"),
            ("CRUD_RECONNECT_BASE_MS", "soon"),
            ("CRUD_LOG_CAPACITY", "-3"),
            ("CRUD_CSRF_TOKEN", ""),
        ]);

        assert_eq!(config.locale, Locale::ZhCn);
        assert_eq!(config.backoff.base_delay_ms(), 500);
        assert_eq!(config.log_capacity, 200);
        assert_eq!(config.csrf_token, None);
    }

    #[test]
    fn test_huge_log_capacity_is_bounded() {
        let config = config_from(&[("CRUD_LOG_CAPACITY", "18446744073709551615")]);
        assert_eq!(config.log_capacity, MAX_CAPACITY);
    }

    #[test]
    fn test_runtime_value_wins_over_build_time_value() {
        let config = Config::from_lookup(|key| {
            (key == LOCALE_VAR)
                .then(|| "en".to_string())
                .or_else(|| build_time_value(key).map(str::to_string))
        });
        assert_eq!(config.locale, Locale::En);
    }
}
