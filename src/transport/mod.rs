use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::error::{Error, Result};

/// The closed method set of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied field mapping, passed to the API verbatim: no renaming,
/// no reordering beyond JSON object semantics.
pub type Params = serde_json::Map<String, Value>;

/// Build a [`Params`] mapping from literal key/value pairs.
///
/// Values go through [`serde_json::json!`], so anything that macro accepts
/// works here (including nested `json!` objects):
///
/// ```
/// use razorpay::params;
///
/// let fields = params! {
///     "amount": 100,
///     "currency": "INR",
/// };
/// assert_eq!(fields["amount"], 100);
/// assert_eq!(fields["currency"], "INR");
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::transport::Params::new()
    };
    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut map = $crate::transport::Params::new();
        $(
            map.insert(($key).to_string(), $crate::serde_json::json!($value));
        )+
        map
    }};
}

/// Transport collaborator every resource operation goes through.
///
/// The built-in implementation is [`HttpTransport`]; tests and embedders can
/// provide their own via
/// [`Client::with_transport`](crate::client::Client::with_transport).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `method` against `path` (relative to the base URL).
    ///
    /// `params` become the query string for GET and the JSON body for
    /// POST/PATCH; `None` sends no body at all. The parsed response body is
    /// returned for success statuses; anything else maps through
    /// [`Error::from_response`].
    async fn request(&self, method: Method, path: &str, params: Option<Params>) -> Result<Value>;
}

/// Production transport: reqwest with basic-auth credentials and optional
/// transient-retry middleware. Retries, pooling and TLS live here; the
/// resource layer above never retries.
pub struct HttpTransport {
    http: ClientWithMiddleware,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl HttpTransport {
    /// Build a transport from a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("razorpay-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(policy));
        }

        Ok(Self {
            http: builder.build(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: Method, path: &str, params: Option<Params>) -> Result<Value> {
        let url = self.url(path);
        debug!(method = method.as_str(), path, "sending API request");

        let request = match method {
            Method::Get => {
                let request = self.http.get(&url);
                match &params {
                    Some(params) => request.query(&query_pairs(params)),
                    None => request,
                }
            }
            Method::Post => {
                let request = self.http.post(&url);
                match &params {
                    Some(params) => request.json(params),
                    None => request,
                }
            }
            Method::Patch => {
                let request = self.http.patch(&url);
                match &params {
                    Some(params) => request.json(params),
                    None => request,
                }
            }
        };

        let response = request
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            method = method.as_str(),
            path,
            status = status.as_u16(),
            "API response received"
        );

        if !status.is_success() {
            warn!(
                method = method.as_str(),
                path,
                status = status.as_u16(),
                "API request failed"
            );
            return Err(Error::from_response(status, &body));
        }

        // A handful of endpoints answer 2xx with no body at all.
        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Flatten a params map into query pairs. String values go through as-is,
/// other scalars use their JSON rendering, and nulls are dropped.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
