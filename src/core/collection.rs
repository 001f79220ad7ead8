use serde::Deserialize;

/// Wrapper over a list response envelope:
/// `{"entity": "collection", "count": n, "items": [...]}`.
///
/// Collections are read-only and only come from deserializing a response
/// body; there is no way for callers to build one. Items keep the order the
/// server sent them in.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    entity: Option<String>,

    #[serde(default)]
    count: Option<u64>,

    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Items in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in this response.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count reported by the server, falling back to the item count when the
    /// envelope omits it.
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(self.items.len() as u64)
    }

    /// The envelope's `entity` discriminator, when present.
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the wrapper, keeping the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
