//! Client configuration.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::SwapError;

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV_VAR: &str = "ZOS_SWAP_BASE_URL";

/// Environment variable overriding the timeout, in milliseconds.
pub const TIMEOUT_ENV_VAR: &str = "ZOS_SWAP_TIMEOUT_MS";

/// Plain-data client configuration.
///
/// Every field is optional; missing ones fall back to the builder defaults.
/// The JavaScript-style keys `baseURL` and `timeout` are accepted as aliases.
///
/// # Example
///
/// ```rust
/// use zos_swap_client::swap::{SwapClient, SwapClientConfig};
///
/// let config: SwapClientConfig = serde_json::from_str(
///     r#"{"baseURL":"https://api.test.com","timeout":5000,"headers":{"x-client":"demo"}}"#,
/// ).unwrap();
/// let client = SwapClient::from_config(config).unwrap();
/// assert_eq!(client.base_url(), "https://api.test.com/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SwapClientConfig {
    /// Request origin and path prefix
    #[serde(default, alias = "baseURL", alias = "baseUrl")]
    pub base_url: Option<String>,
    /// Per-request deadline in milliseconds
    #[serde(default, alias = "timeout")]
    pub timeout_ms: Option<u64>,
    /// Additional default headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl SwapClientConfig {
    /// Read overrides from `ZOS_SWAP_BASE_URL` and `ZOS_SWAP_TIMEOUT_MS`.
    ///
    /// Unset variables leave the corresponding field empty. A timeout that is
    /// not a whole number of milliseconds is a configuration fault.
    pub fn from_env() -> Result<Self, SwapError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty());
        let timeout_ms = match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                SwapError::request(format!("invalid {TIMEOUT_ENV_VAR} value {raw:?}: {e}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            timeout_ms,
            headers: HashMap::new(),
        })
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Convert the header mapping into a typed header map.
    pub fn header_map(&self) -> Result<HeaderMap, SwapError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SwapError::request(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SwapError::request(format!("invalid value for header {name}: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_js_style_keys() {
        let config: SwapClientConfig =
            serde_json::from_str(r#"{"baseURL":"https://api.test.com","timeout":2500}"#).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://api.test.com"));
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config: SwapClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SwapClientConfig::default());
    }

    #[test]
    fn test_header_map() {
        let mut config = SwapClientConfig::default();
        config.headers.insert("X-Client".into(), "demo".into());
        let map = config.header_map().unwrap();
        assert_eq!(map.get("x-client").unwrap(), "demo");
    }

    #[test]
    fn test_invalid_header_is_request_error() {
        let mut config = SwapClientConfig::default();
        config.headers.insert("bad header".into(), "demo".into());
        let err = config.header_map().unwrap_err();
        assert!(err.is_request());
        assert!(err.message().starts_with("Request error: invalid header name"));
    }
}
