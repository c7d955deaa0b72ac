//! Process configuration.
//!
//! Three secrets are required; everything else has a default.  Missing
//! secrets are a startup failure, never a runtime fault.

use std::time::Duration;

use anyhow::{bail, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Notifier configuration.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat the notifications go to.
    pub telegram_chat_id: String,
    /// Status API endpoint.
    pub endpoint: String,
    /// Telegram Bot API base URL.
    pub telegram_api_url: String,
    /// Pause between cycles.
    pub poll_interval: Duration,
    /// Per-request timeout for both HTTP capabilities.
    pub request_timeout: Duration,
}

// Secrets stay out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TOKEN_YANDEX (required)
    /// - TOKEN_TELEGRAM (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| anyhow::anyhow!("{key} environment variable not set"))
        };
        let seconds = |key: &str, default: u64| -> Result<Duration> {
            match get(key) {
                None => Ok(Duration::from_secs(default)),
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(secs) => Ok(Duration::from_secs(secs)),
                    Err(_) => bail!("{key} must be a whole number of seconds, got {raw:?}"),
                },
            }
        };

        Ok(Self {
            practicum_token: require("TOKEN_YANDEX")?,
            telegram_token: require("TOKEN_TELEGRAM")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval: seconds("RETRY_TIME", 600)?,
            request_timeout: seconds("REQUEST_TIMEOUT", 30)?,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("{name} must start with http:// or https://");
            }
        }

        if self.poll_interval.is_zero() {
            bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const SECRETS: [(&str, &str); 3] = [
        ("TOKEN_YANDEX", "y-token"),
        ("TOKEN_TELEGRAM", "t-token"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&SECRETS)).unwrap();

        assert_eq!(config.practicum_token, "y-token");
        assert_eq!(config.telegram_token, "t-token");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        for missing in ["TOKEN_YANDEX", "TOKEN_TELEGRAM", "TELEGRAM_CHAT_ID"] {
            let pairs: Vec<_> = SECRETS.iter().copied().filter(|(k, _)| *k != missing).collect();
            let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let mut pairs = SECRETS.to_vec();
        pairs[1] = ("TOKEN_TELEGRAM", "   ");
        assert!(Config::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut pairs = SECRETS.to_vec();
        pairs.push(("RETRY_TIME", "60"));
        pairs.push(("REQUEST_TIMEOUT", "5"));
        pairs.push(("PRACTICUM_ENDPOINT", "http://localhost:8000/statuses/"));

        let config = Config::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://localhost:8000/statuses/");
    }

    #[test]
    fn test_bad_interval_is_rejected() {
        let mut pairs = SECRETS.to_vec();
        pairs.push(("RETRY_TIME", "ten minutes"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&SECRETS)).unwrap();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config::from_lookup(lookup(&SECRETS)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("y-token"));
        assert!(!debug.contains("t-token"));
    }
}
