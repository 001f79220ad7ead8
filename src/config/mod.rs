use std::env;
use std::fmt;

use crate::core::error::{Error, Result};

/// Default live API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration: credentials plus transport tuning.
///
/// Every request authenticates with `key_id`/`key_secret` over HTTP basic
/// auth. `base_url` is swappable so tests can point the client at a local
/// mock server.
#[derive(Clone)]
pub struct Config {
    pub key_id: String,
    pub key_secret: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Config {
    /// Configuration with the given credentials and default transport
    /// settings: live endpoint, 30 second timeout, no retries.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: 0,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `RAZORPAY_KEY_ID` and `RAZORPAY_KEY_SECRET` are required;
    /// `RAZORPAY_BASE_URL`, `RAZORPAY_TIMEOUT_SECS` and
    /// `RAZORPAY_MAX_RETRIES` override the defaults when present. A `.env`
    /// file in the working directory is honored.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let key_id = require_env("RAZORPAY_KEY_ID")?;
        let key_secret = require_env("RAZORPAY_KEY_SECRET")?;

        let mut config = Self::new(key_id, key_secret);

        if let Ok(base_url) = env::var("RAZORPAY_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var("RAZORPAY_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| {
                Error::configuration(format!("RAZORPAY_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }
        if let Ok(raw) = env::var("RAZORPAY_MAX_RETRIES") {
            config.max_retries = raw.parse().map_err(|_| {
                Error::configuration(format!("RAZORPAY_MAX_RETRIES is not a number: {raw}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Retry transient transport failures up to `max_retries` times.
    /// Resource operations themselves are never replayed above the
    /// transport.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Reject configurations that cannot possibly authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.key_id.is_empty() {
            return Err(Error::configuration("key_id must not be empty"));
        }
        if self.key_secret.is_empty() {
            return Err(Error::configuration("key_secret must not be empty"));
        }
        if self.base_url.is_empty() {
            return Err(Error::configuration("base_url must not be empty"));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::configuration(format!("{name} is not set")))
}

// Manual Debug keeps the secret out of logs and error reports.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
