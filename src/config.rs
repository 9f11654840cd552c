// Client configuration.
// Holds the API key, base address, transport settings, and cache policy.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, SteamError};

pub const STEAM_API_BASE: &str = "http://api.steampowered.com";

const DEFAULT_USER_AGENT: &str = concat!("steam-webapi/", env!("CARGO_PKG_VERSION"));
const API_KEY_LEN: usize = 32;

/// Validated Steam Web API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Parse a key: exactly 32 ASCII alphanumeric characters.
    pub fn parse(key: &str) -> Result<Self> {
        if key.len() == API_KEY_LEN && key.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(key.to_string()))
        } else {
            Err(SteamError::InvalidKey)
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Memoizing cache policy.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Master switch; when off no call consults or populates the cache.
    pub enabled: bool,
    /// Upper bound on stored entries. The oldest entry is evicted first.
    pub max_entries: usize,
    /// Entry lifetime. `None` keeps entries for the lifetime of the client.
    pub ttl: Option<Duration>,
    /// Also memoize failed calls and replay them.
    pub cache_failures: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 1024,
            ttl: None,
            cache_failures: false,
        }
    }
}

/// Immutable configuration threaded through every call of a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    /// Allow construction without a key.
    pub test_mode: bool,
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
    pub cache: CacheConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: STEAM_API_BASE.to_string(),
            test_mode: false,
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration for a validated key.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            api_key: Some(ApiKey::parse(key)?),
            ..Self::default()
        })
    }

    /// Key-less configuration. Key-requiring endpoints get an empty `key=`.
    pub fn test_mode() -> Self {
        Self {
            test_mode: true,
            ..Self::default()
        }
    }

    /// Build configuration from environment variables.
    ///
    /// Reads `STEAM_KEY`, `STEAM_WEBAPI_BASE_URL`, `STEAM_WEBAPI_TEST_MODE`,
    /// `STEAM_WEBAPI_TIMEOUT_SECS`, `STEAM_WEBAPI_CACHE_MAX_ENTRIES` and
    /// `STEAM_WEBAPI_CACHE_TTL_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let test_mode = lookup("STEAM_WEBAPI_TEST_MODE")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        let api_key = match lookup("STEAM_KEY").filter(|k| !k.is_empty()) {
            Some(key) => match ApiKey::parse(key.trim()) {
                Ok(key) => Some(key),
                Err(_) if test_mode => None,
                Err(e) => return Err(e),
            },
            None if test_mode => None,
            None => return Err(SteamError::MissingKey),
        };

        let mut config = Self {
            api_key,
            test_mode,
            ..Self::default()
        };

        if let Some(base_url) = lookup("STEAM_WEBAPI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) = parse_secs(&lookup, "STEAM_WEBAPI_TIMEOUT_SECS")? {
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(max) = lookup("STEAM_WEBAPI_CACHE_MAX_ENTRIES") {
            config.cache.max_entries = max.trim().parse().map_err(|_| {
                SteamError::Config(format!("STEAM_WEBAPI_CACHE_MAX_ENTRIES: {max:?}"))
            })?;
        }
        if let Some(secs) = parse_secs(&lookup, "STEAM_WEBAPI_CACHE_TTL_SECS")? {
            config.cache.ttl = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that a client can be built from this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_none() && !self.test_mode {
            return Err(SteamError::MissingKey);
        }
        if url::Url::parse(self.base_url()).is_err() {
            return Err(SteamError::Config(format!(
                "base URL is not absolute: {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u64>> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SteamError::Config(format!("{name}: {value:?}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "ABCDEF0123456789abcdef0123456789";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_api_key_validation() {
        assert!(ApiKey::parse(KEY).is_ok());
        assert!(matches!(ApiKey::parse("short"), Err(SteamError::InvalidKey)));
        assert!(matches!(
            ApiKey::parse("ABCDEF0123456789abcdef012345678!"),
            Err(SteamError::InvalidKey)
        ));
        assert!(matches!(
            ApiKey::parse("ABCDEF0123456789abcdef01234567890"),
            Err(SteamError::InvalidKey)
        ));
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::parse(KEY).unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.to_string(), "***");
        assert_eq!(key.expose(), KEY);
    }

    #[test]
    fn test_from_env_requires_key() {
        let result = ClientConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(SteamError::MissingKey)));

        let result = ClientConfig::from_lookup(lookup(&[("STEAM_KEY", "nope")]));
        assert!(matches!(result, Err(SteamError::InvalidKey)));
    }

    #[test]
    fn test_from_env_test_mode_bypass() {
        let config =
            ClientConfig::from_lookup(lookup(&[("STEAM_WEBAPI_TEST_MODE", "1")])).unwrap();
        assert!(config.test_mode);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());

        let config = ClientConfig::from_lookup(lookup(&[
            ("STEAM_WEBAPI_TEST_MODE", "true"),
            ("STEAM_KEY", "malformed"),
        ]))
        .unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_from_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STEAM_KEY", KEY),
            ("STEAM_WEBAPI_BASE_URL", "http://127.0.0.1:8080/"),
            ("STEAM_WEBAPI_TIMEOUT_SECS", "15"),
            ("STEAM_WEBAPI_CACHE_MAX_ENTRIES", "8"),
            ("STEAM_WEBAPI_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.cache.max_entries, 8);
        assert_eq!(config.cache.ttl, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_from_env_rejects_bad_numbers() {
        let result = ClientConfig::from_lookup(lookup(&[
            ("STEAM_KEY", KEY),
            ("STEAM_WEBAPI_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(SteamError::Config(_))));
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            ClientConfig::default().validate(),
            Err(SteamError::MissingKey)
        ));
        assert!(ClientConfig::new(KEY).unwrap().validate().is_ok());
        assert!(matches!(
            ClientConfig::test_mode().with_base_url("not a url").validate(),
            Err(SteamError::Config(_))
        ));
    }
}
