// Request building.
// Turns an endpoint's parameters into a URL and a cache fingerprint.

use url::form_urlencoded;

use crate::config::ApiKey;
use crate::error::Result;

use super::format::Format;
use super::operation::Operation;

/// Options every operation accepts.
#[derive(Debug, Clone)]
pub struct CallOptions {
    format: String,
    specific_data: Option<String>,
    use_cache: bool,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            format: Format::Json.as_str().to_string(),
            specific_data: None,
            use_cache: true,
        }
    }
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format.as_str().to_string();
        self
    }

    /// Request a format by tag. Unknown tags fail at call time, before any
    /// network traffic.
    pub fn raw_format(mut self, tag: impl Into<String>) -> Self {
        self.format = tag.into();
        self
    }

    /// Dotted sub-path under the operation's top-level response field.
    pub fn specific_data(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.specific_data = (!path.is_empty()).then_some(path);
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn resolve_format(&self) -> Result<Format> {
        self.format.parse()
    }

    pub fn specific_data_path(&self) -> Option<&str> {
        self.specific_data.as_deref()
    }

    pub fn uses_cache(&self) -> bool {
        self.use_cache
    }
}

/// Parameters of one Steam Web API operation.
pub trait Endpoint {
    const OPERATION: Operation;

    /// Encoded query pairs, in wire order, without the trailing `format`.
    /// `key` is the API key value (possibly empty in test mode).
    fn query(&self, key: &str) -> Vec<(&'static str, String)>;

    /// Parameter values that distinguish one cached result from another.
    fn cache_params(&self) -> Vec<String>;

    fn options(&self) -> &CallOptions;
}

/// A fully built call, ready to resolve.
#[derive(Debug, Clone)]
pub struct Request {
    pub operation: Operation,
    pub url: String,
    pub format: Format,
    pub specific_data: Option<String>,
    pub fingerprint: String,
    pub use_cache: bool,
}

impl Request {
    /// Build the URL and fingerprint for an endpoint call.
    ///
    /// Fails only on an unsupported format; parameter values are not validated.
    pub fn build<E: Endpoint>(endpoint: &E, base_url: &str, key: Option<&ApiKey>) -> Result<Self> {
        let operation = E::OPERATION;
        let options = endpoint.options();
        let format = options.resolve_format()?;
        let key = key.map(ApiKey::expose).unwrap_or_default();

        let mut url = String::with_capacity(128);
        url.push_str(base_url.trim_end_matches('/'));
        url.push_str(operation.path());
        url.push('?');
        for (name, value) in endpoint.query(key) {
            url.push_str(name);
            url.push('=');
            url.push_str(&value);
            url.push('&');
        }
        url.push_str("format=");
        url.push_str(format.as_str());

        let specific_data = options.specific_data_path().map(str::to_string);
        let fingerprint = fingerprint(
            operation,
            &endpoint.cache_params(),
            format,
            specific_data.as_deref(),
        );

        Ok(Self {
            operation,
            url,
            format,
            specific_data,
            fingerprint,
            use_cache: options.uses_cache(),
        })
    }

    /// Field path to extract. A caller sub-path is resolved under the
    /// top-level field; otherwise the operation's default path applies.
    pub fn field_path(&self) -> String {
        match &self.specific_data {
            Some(extra) => format!("{}.{}", self.operation.root_field(), extra),
            None => self.operation.field_path().to_string(),
        }
    }

    /// URL safe for logs and error messages.
    pub fn redacted_url(&self) -> String {
        redact_key(&self.url)
    }
}

/// Cache key for a call. Excludes the API key and the cache flag.
pub fn fingerprint(
    operation: Operation,
    params: &[String],
    format: Format,
    specific_data: Option<&str>,
) -> String {
    let mut key = format!("{}:{}:{}", operation.name(), params.join("-"), format);
    if let Some(extra) = specific_data {
        key.push(':');
        key.push_str(extra);
    }
    key
}

/// Form-encode a free-text query value.
pub fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Replace the value of any `key=` query parameter with `***`.
pub fn redact_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("key", value)) if !value.is_empty() => "key=***".to_string(),
            _ => pair.to_string(),
        })
        .collect();
    format!("{}?{}", base, query.join("&"))
}
