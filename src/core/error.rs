use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error detail object the API returns inside an `{"error": {...}}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code (e.g. `BAD_REQUEST_ERROR`)
    pub code: Option<String>,

    /// Human-readable description of what went wrong
    #[serde(default)]
    pub description: String,

    /// Request field the error refers to, when the server names one
    pub field: Option<String>,

    /// Originating system reported by the server
    pub source: Option<String>,

    /// Processing step reported by the server
    pub step: Option<String>,

    /// Short failure reason reported by the server
    pub reason: Option<String>,
}

impl ApiError {
    /// Parse an error body, falling back to the raw text when the body is
    /// not the expected envelope (HTML error pages, proxies, empty bodies).
    fn from_body(body: &str) -> Self {
        #[derive(Deserialize)]
        struct Envelope {
            error: ApiError,
        }

        match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => ApiError {
                code: None,
                description: if body.trim().is_empty() {
                    "no response body".to_string()
                } else {
                    body.trim().to_string()
                },
                field: None,
                source: None,
                step: None,
                reason: None,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.description),
            None => f.write_str(&self.description),
        }
    }
}

/// Main client error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid request parameters (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(ApiError),

    /// Credentials were rejected (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(ApiError),

    /// No record behind the requested id (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(ApiError),

    /// The service failed on its side (HTTP 5xx)
    #[error("Server error: {0}")]
    Server(ApiError),

    /// Any other non-success status the taxonomy does not name
    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },

    /// Request never produced a response (connect, middleware, retry budget)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// HTTP client errors while reading a response
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Signature verification errors
    #[error("Signature verification failed: {0}")]
    SignatureVerification(String),
}

impl Error {
    /// Map a non-success response onto the error taxonomy. Custom
    /// [`Transport`](crate::transport::Transport) implementations should use
    /// this so their errors carry the same categories as the built-in one.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let error = ApiError::from_body(body);

        match status {
            StatusCode::BAD_REQUEST => Error::BadRequest(error),
            StatusCode::UNAUTHORIZED => Error::Authentication(error),
            StatusCode::NOT_FOUND => Error::NotFound(error),
            status if status.is_server_error() => Error::Server(error),
            status => Error::Api {
                status: status.as_u16(),
                error,
            },
        }
    }
}

// Helper functions for common error scenarios
impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        Error::SignatureVerification(msg.into())
    }
}
