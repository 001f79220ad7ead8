use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::core::error::Result;
use crate::core::{Collection, Entity};
use crate::transport::Params;

/// An invoice entity as returned by the API.
///
/// Every field except `id` is optional: attributes the server did not send
/// deserialize to `None`, and attributes this crate has no typed field for
/// are retained verbatim in the `extra` map, reachable through
/// [`Entity::attribute`]. Lifecycle operations return a fresh snapshot built
/// from the response body; nothing is merged from the request side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub amount_paid: Option<i64>,
    #[serde(default)]
    pub amount_due: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state as reported by the server ("draft", "issued",
    /// "cancelled", "paid", ...). Free text: the server owns the vocabulary.
    #[serde(default)]
    pub status: Option<String>,
    /// Invoice flavor, `"invoice"` or `"link"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Invoice {
    fn resource() -> &'static str {
        "invoices"
    }

    fn kind() -> &'static str {
        "invoice"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// Identity equality: two snapshots of the same server entity compare equal
// even when their attributes have diverged.
impl PartialEq for Invoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invoice {}

impl Invoice {
    /// Issue this draft invoice, returning the issued snapshot.
    pub async fn issue(&self, client: &Client) -> Result<Invoice> {
        client.invoices().issue(&self.id).await
    }

    /// Cancel this invoice, returning the cancelled snapshot.
    pub async fn cancel(&self, client: &Client) -> Result<Invoice> {
        client.invoices().cancel(&self.id).await
    }

    /// Apply field updates to this invoice, returning the updated snapshot.
    pub async fn edit(&self, client: &Client, params: Params) -> Result<Invoice> {
        client.invoices().update(&self.id, params).await
    }
}

/// Invoice operations, scoped to a [`Client`].
pub struct Invoices<'a> {
    client: &'a Client,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an invoice from caller-supplied fields. The result reflects
    /// the response body, including server-filled attributes.
    pub async fn create(&self, params: Params) -> Result<Invoice> {
        self.client.post(Invoice::resource(), Some(params)).await
    }

    /// Fetch one invoice by id.
    pub async fn fetch(&self, id: &str) -> Result<Invoice> {
        self.client
            .get(&format!("{}/{id}", Invoice::resource()), None)
            .await
    }

    /// List invoices, optionally filtered (`count`, `skip`, `customer_id`,
    /// ...). Filters travel as query parameters.
    pub async fn all(&self, params: Option<Params>) -> Result<Collection<Invoice>> {
        self.client.get(Invoice::resource(), params).await
    }

    /// Issue the draft invoice with this id.
    pub async fn issue(&self, id: &str) -> Result<Invoice> {
        self.client
            .post(&format!("{}/{id}/issue", Invoice::resource()), None)
            .await
    }

    /// Cancel the invoice with this id.
    pub async fn cancel(&self, id: &str) -> Result<Invoice> {
        self.client
            .post(&format!("{}/{id}/cancel", Invoice::resource()), None)
            .await
    }

    pub(crate) async fn update(&self, id: &str, params: Params) -> Result<Invoice> {
        self.client
            .patch(&format!("{}/{id}", Invoice::resource()), Some(params))
            .await
    }
}
