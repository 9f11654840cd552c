// Steam Web API HTTP client.
// Builds requests, resolves responses by format, and memoizes results.

use reqwest::{Client, Response};
use serde_json::Value;

use crate::cache::{CacheStats, Outcome, ResponseCache};
use crate::config::ClientConfig;
use crate::error::{Result, SteamError};

use super::format::Format;
use super::payload::{Payload, extract};
use super::request::{Endpoint, Request};

/// Steam Web API client with an in-memory response cache.
#[derive(Debug)]
pub struct SteamClient {
    client: Client,
    config: ClientConfig,
    cache: ResponseCache,
}

impl SteamClient {
    /// Create a new client. Fails on a missing or malformed key unless the
    /// configuration is in test mode.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::error!("Cannot create Steam Web API client: {}", e);
            return Err(e);
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SteamError::Http)?;

        Ok(Self {
            client,
            cache: ResponseCache::from_config(&config.cache),
            config,
        })
    }

    /// Create a client from `STEAM_KEY` and related environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request for an endpoint without sending it.
    pub fn request<E: Endpoint>(&self, endpoint: &E) -> Result<Request> {
        Request::build(endpoint, self.config.base_url(), self.config.api_key.as_ref())
    }

    /// Fully qualified URL for an endpoint call.
    pub fn build_url<E: Endpoint>(&self, endpoint: &E) -> Result<String> {
        self.request(endpoint).map(|request| request.url)
    }

    /// Run an endpoint call, consulting the cache unless the call opts out.
    pub async fn call<E: Endpoint>(&self, endpoint: &E) -> Result<Payload> {
        let request = match self.request(endpoint) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!("{} rejected before sending: {}", E::OPERATION, e);
                return Err(e);
            }
        };

        if !request.use_cache || !self.config.cache.enabled {
            return self.resolve(&request).await;
        }

        if let Some(outcome) = self.cache.get(&request.fingerprint) {
            tracing::debug!(fingerprint = %request.fingerprint, "cache hit");
            return outcome.into_result();
        }
        tracing::debug!(fingerprint = %request.fingerprint, "cache miss");

        let result = self.resolve(&request).await;
        match &result {
            Ok(payload) => self
                .cache
                .insert(request.fingerprint.clone(), Outcome::Success(payload.clone())),
            Err(e) if self.config.cache.cache_failures => self
                .cache
                .insert(request.fingerprint.clone(), Outcome::failure(e)),
            Err(_) => {}
        }
        result
    }

    /// Fetch a built request and extract its payload. Never touches the cache.
    pub async fn resolve(&self, request: &Request) -> Result<Payload> {
        let response = self.get(request).await?;

        match request.format {
            Format::Json => {
                let body = response.text().await.map_err(|e| {
                    let e = e.without_url();
                    tracing::error!("Failed to read body from {}: {}", request.redacted_url(), e);
                    SteamError::Http(e)
                })?;
                let value: Value = serde_json::from_str(&body).map_err(|e| {
                    tracing::error!("The server returned invalid JSON for {}: {}", request.operation, e);
                    SteamError::Json(e)
                })?;

                let path = request.field_path();
                extract(value, &path).map(Payload::Json).inspect_err(|e| {
                    tracing::warn!("{} returned no data: {}", request.operation, e);
                })
            }
            Format::Xml | Format::Vdf => {
                let text = response.text().await.map_err(|e| {
                    let e = e.without_url();
                    tracing::error!(
                        "Error fetching {} from {}: {}",
                        request.format,
                        request.redacted_url(),
                        e
                    );
                    SteamError::Http(e)
                })?;
                Ok(Payload::Text(text))
            }
        }
    }

    /// Memoization counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Forget every memoized result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Forget the memoized result for one endpoint call.
    pub fn invalidate<E: Endpoint>(&self, endpoint: &E) -> Result<bool> {
        let request = self.request(endpoint)?;
        Ok(self.cache.invalidate(&request.fingerprint))
    }

    /// Make a GET request for a built call.
    async fn get(&self, request: &Request) -> Result<Response> {
        tracing::debug!("Steam API request URL: {}", request.redacted_url());

        let response = self.client.get(&request.url).send().await.map_err(|e| {
            // Errors carry the request URL, which includes the key
            let e = e.without_url();
            tracing::error!("The server returned an error: {}", e);
            SteamError::Http(e)
        })?;
        self.check_response(response, request).await
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response, request: &Request) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = request.redacted_url();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            "Error fetching {}: response code {} ({})",
            request.format,
            status,
            body.chars().take(200).collect::<String>()
        );
        Err(SteamError::Status { status, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steam::params::{FriendList, NewsForApp};

    #[test]
    fn test_new_requires_key_outside_test_mode() {
        let result = SteamClient::new(ClientConfig::default());
        assert!(matches!(result, Err(SteamError::MissingKey)));

        assert!(SteamClient::new(ClientConfig::test_mode()).is_ok());
        assert!(SteamClient::new(ClientConfig::new("0123456789ABCDEF0123456789ABCDEF").unwrap()).is_ok());
    }

    #[test]
    fn test_build_url_uses_configured_base() {
        let client =
            SteamClient::new(ClientConfig::test_mode().with_base_url("http://127.0.0.1:9/")).unwrap();
        assert_eq!(
            client.build_url(&NewsForApp::new(440)).unwrap(),
            "http://127.0.0.1:9/ISteamNews/GetNewsForApp/v0002/?appid=440&count=3&maxlength=300&format=json"
        );
    }

    #[test]
    fn test_invalidate_unknown_entry() {
        let client = SteamClient::new(ClientConfig::test_mode()).unwrap();
        assert!(!client.invalidate(&FriendList::new("1")).unwrap());
        assert_eq!(client.cache_stats(), CacheStats::default());
    }
}
