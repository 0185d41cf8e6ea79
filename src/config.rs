//! Per-invocation configuration for the Gemini proxy.
//!
//! Configuration is read from the process environment on every call rather
//! than cached at startup, so a missing API key only fails the current
//! invocation. The lookup is injectable so tests never touch the real
//! environment.

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the upstream origin.
pub const BASE_URL_VAR: &str = "GEMINI_API_BASE_URL";
/// Environment variable overriding the model id.
pub const MODEL_VAR: &str = "GEMINI_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-preview-0520";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// `None` when the key is unset or empty.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl ProxyConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            api_key: non_empty(API_KEY_VAR),
            base_url: non_empty(BASE_URL_VAR).map_or_else(
                || DEFAULT_BASE_URL.to_string(),
                |url| url.trim_end_matches('/').to_string(),
            ),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Default upstream settings with the given key.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Upstream `generateContent` URL without the key query parameter.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_only_key_set() {
        let config = ProxyConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")]));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_key() {
        let config = ProxyConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_empty_key_is_missing() {
        let config = ProxyConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "")]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = ProxyConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://127.0.0.1:1234/"),
            (MODEL_VAR, "gemini-test"),
        ]));

        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert_eq!(
            config.generate_content_url(),
            "http://127.0.0.1:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_default_upstream_url() {
        let config = ProxyConfig::with_api_key("secret");
        assert_eq!(
            config.generate_content_url(),
            concat!(
                "https://generativelanguage.googleapis.com",
                "/v1beta/models/gemini-1.5-flash-preview-0520:generateContent"
            )
        );
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let config = ProxyConfig::from_env();
        assert!(!config.base_url.is_empty());
    }
}
