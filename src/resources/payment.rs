use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::core::error::Result;
use crate::core::{Collection, Entity};
use crate::transport::Params;

/// A payment entity as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Lifecycle state as reported by the server ("created", "authorized",
    /// "captured", "refunded", "failed", ...).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub captured: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub fee: Option<i64>,
    #[serde(default)]
    pub tax: Option<i64>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Payment {
    fn resource() -> &'static str {
        "payments"
    }

    fn kind() -> &'static str {
        "payment"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}

/// Payment operations, scoped to a [`Client`].
pub struct Payments<'a> {
    client: &'a Client,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch one payment by id.
    pub async fn fetch(&self, id: &str) -> Result<Payment> {
        self.client
            .get(&format!("{}/{id}", Payment::resource()), None)
            .await
    }

    /// List payments, optionally filtered.
    pub async fn all(&self, params: Option<Params>) -> Result<Collection<Payment>> {
        self.client.get(Payment::resource(), params).await
    }

    /// Capture the authorized payment with this id. The amount to capture
    /// must match the authorized amount and travels in `params`.
    pub async fn capture(&self, id: &str, params: Params) -> Result<Payment> {
        self.client
            .post(&format!("{}/{id}/capture", Payment::resource()), Some(params))
            .await
    }
}
