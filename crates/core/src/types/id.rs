//! Product identifiers.
//!
//! Product IDs are human-readable slugs (`salmon-premium`, `fishing-net`)
//! that are unique within a collection. They are wrapped in a newtype so a
//! product ID cannot be confused with a category label or a display name.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A type-safe product identifier.
///
/// # Example
///
/// ```rust
/// # use marine_harvest_core::ProductId;
/// let id = ProductId::new("salmon-premium");
/// assert_eq!(id.as_str(), "salmon-premium");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::new("oysters-dozen");
        assert_eq!(
            serde_json::to_string(&id).expect("serialize"),
            "\"oysters-dozen\""
        );

        let parsed: ProductId = serde_json::from_str("\"lobster-live\"").expect("deserialize");
        assert_eq!(parsed, "lobster-live");
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from("water-pump").to_string(), "water-pump");
    }
}
