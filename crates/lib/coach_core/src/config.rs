//! Provider connection configuration.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// OpenRouter's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Upper bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Unknown chat variant: {0} (expected sectioned, common or raw-fetch)")]
    UnknownVariant(String),

    #[error("Invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Connection settings for an OpenAI-compatible chat-completion API.
#[derive(Clone)]
pub struct ProviderConfig {
    /// API root; `/chat/completions` is appended.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Sent as `HTTP-Referer` when set.
    pub site_url: Option<String>,
    /// Sent as `X-Title` when set.
    pub site_name: Option<String>,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Builds a config, rejecting an empty key or a zero timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::Missing(API_KEY_ENV));
        }
        if timeout.is_zero() {
            return Err(ConfigError::Invalid {
                name: "provider timeout",
                reason: "must be greater than zero".into(),
            });
        }
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "provider base url",
                reason: format!("expected an http(s) URL, got {base_url:?}"),
            });
        }
        Ok(Self {
            base_url,
            api_key,
            site_url: None,
            site_name: None,
            timeout,
        })
    }

    /// Sets the optional attribution headers. Empty strings count as unset.
    pub fn with_site(mut self, site_url: Option<String>, site_name: Option<String>) -> Self {
        self.site_url = site_url.filter(|s| !s.is_empty());
        self.site_name = site_name.filter(|s| !s.is_empty());
        self
    }

    /// Full chat-completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_rejected() {
        let err = ProviderConfig::new(DEFAULT_BASE_URL, "  ", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_KEY_ENV)));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = ProviderConfig::new(DEFAULT_BASE_URL, "k", Duration::ZERO).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let err = ProviderConfig::new("openrouter.ai", "k", DEFAULT_TIMEOUT).unwrap_err();
        assert!(err.to_string().contains("provider base url"));
    }

    #[test]
    fn completions_url_joins_cleanly() {
        let cfg = ProviderConfig::new("http://localhost:9000/v1/", "k", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(cfg.completions_url(), "http://localhost:9000/v1/chat/completions");
        let cfg = ProviderConfig::new(DEFAULT_BASE_URL, "k", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            cfg.completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn empty_site_headers_are_unset() {
        let cfg = ProviderConfig::new(DEFAULT_BASE_URL, "k", DEFAULT_TIMEOUT)
            .unwrap()
            .with_site(Some(String::new()), Some("Coach".into()));
        assert_eq!(cfg.site_url, None);
        assert_eq!(cfg.site_name.as_deref(), Some("Coach"));
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = ProviderConfig::new(DEFAULT_BASE_URL, "sk-secret", DEFAULT_TIMEOUT).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
