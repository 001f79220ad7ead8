use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::core::error::Result;
use crate::core::{Collection, Entity};
use crate::transport::Params;

/// A customer entity as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Customer {
    fn resource() -> &'static str {
        "customers"
    }

    fn kind() -> &'static str {
        "customer"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Customer {
    /// Apply field updates to this customer, returning the updated snapshot.
    pub async fn edit(&self, client: &Client, params: Params) -> Result<Customer> {
        client.customers().update(&self.id, params).await
    }
}

/// Customer operations, scoped to a [`Client`].
pub struct Customers<'a> {
    client: &'a Client,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a customer from caller-supplied fields.
    pub async fn create(&self, params: Params) -> Result<Customer> {
        self.client.post(Customer::resource(), Some(params)).await
    }

    /// Fetch one customer by id.
    pub async fn fetch(&self, id: &str) -> Result<Customer> {
        self.client
            .get(&format!("{}/{id}", Customer::resource()), None)
            .await
    }

    /// List customers, optionally filtered.
    pub async fn all(&self, params: Option<Params>) -> Result<Collection<Customer>> {
        self.client.get(Customer::resource(), params).await
    }

    pub(crate) async fn update(&self, id: &str, params: Params) -> Result<Customer> {
        self.client
            .patch(&format!("{}/{id}", Customer::resource()), Some(params))
            .await
    }
}
