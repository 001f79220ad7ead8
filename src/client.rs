use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::core::error::Result;
use crate::resources::{Customers, Invoices, Payments};
use crate::transport::{HttpTransport, Method, Params, Transport};

/// Handle to the API.
///
/// Cheap to clone; every clone shares the same transport and connection
/// pool. Resource operations hang off the accessors:
///
/// ```no_run
/// # async fn demo() -> razorpay::Result<()> {
/// use razorpay::Client;
///
/// let client = Client::new("rzp_test_key", "secret")?;
/// let invoice = client.invoices().fetch("inv_6vRZmJYFAG1mNq").await?;
/// println!("status: {:?}", invoice.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client with the given credentials and default transport settings.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(key_id, key_secret))
    }

    /// Client from a full configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Client configured from `RAZORPAY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    /// Client over a caller-supplied transport, bypassing HTTP entirely.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Invoice operations.
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    /// Customer operations.
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Payment operations.
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub(crate) async fn get<T>(&self, path: &str, params: Option<Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Get, path, params).await
    }

    pub(crate) async fn post<T>(&self, path: &str, params: Option<Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Post, path, params).await
    }

    pub(crate) async fn patch<T>(&self, path: &str, params: Option<Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Patch, path, params).await
    }

    async fn request<T>(&self, method: Method, path: &str, params: Option<Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body: Value = self.transport.request(method, path, params).await?;
        Ok(serde_json::from_value(body)?)
    }
}
