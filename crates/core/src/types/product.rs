//! Product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// An immutable catalog product.
///
/// Products are defined at load time and never mutated; the cart stores
/// them by value so a persisted cart can be rendered without a catalog
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the product's collection.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URI.
    pub image: String,
    /// Free-text grouping label (e.g. "Fish", "Shellfish").
    pub category: String,
    /// Display description.
    pub description: String,
}

impl Product {
    /// Whether `needle` (already lowercased) occurs in the name or
    /// description, ignoring case.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
