use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Base behavior shared by every API resource record.
///
/// Entities are built only by deserializing a response body: the server owns
/// ids, field values and status transitions, and the client stores whatever
/// the most recent successful response said. Keys the client has no typed
/// field for land in the entity's `extra` map and stay reachable through
/// [`attribute`](Entity::attribute).
pub trait Entity: Serialize + DeserializeOwned {
    /// Plural path segment the resource lives under (e.g. `"invoices"`).
    fn resource() -> &'static str;

    /// Value of the `entity` discriminator the server tags records with
    /// (e.g. `"invoice"`).
    fn kind() -> &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> &str;

    /// Read any attribute by its wire name, typed or not. Undefined
    /// attributes come back as `Value::Null`, never an error.
    fn attribute(&self, name: &str) -> Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|value| value.get(name).cloned())
            .unwrap_or(Value::Null)
    }
}
