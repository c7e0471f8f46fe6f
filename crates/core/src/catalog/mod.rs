//! Built-in product collections.
//!
//! The catalog is a fixed set of named collections, each an ordered list of
//! products. Collection order is the "featured" order shown when no sort is
//! selected.
//!
//! # Example
//!
//! ```rust
//! use marine_harvest_core::{Catalog, CollectionHandle};
//!
//! let catalog = Catalog::builtin();
//! let marine = catalog.collection(CollectionHandle::Marine);
//! assert!(marine.find("salmon-premium").is_some());
//! ```

mod data;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Product;

/// Error parsing a collection handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

/// Handle naming one catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionHandle {
    Marine,
    Farming,
    Sustainable,
    Equipment,
}

impl CollectionHandle {
    /// Every collection, in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Marine,
        Self::Farming,
        Self::Sustainable,
        Self::Equipment,
    ];

    /// URL-safe handle string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Marine => "marine",
            Self::Farming => "farming",
            Self::Sustainable => "sustainable",
            Self::Equipment => "equipment",
        }
    }

    /// Display title for the collection's product list.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Marine => "Fresh Marine Products",
            Self::Farming => "Farming Equipment",
            Self::Sustainable => "Sustainable Farming Products",
            Self::Equipment => "Marine Equipment",
        }
    }
}

impl fmt::Display for CollectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionHandle {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

/// A named, fixed list of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCollection {
    pub handle: CollectionHandle,
    pub title: String,
    pub products: Vec<Product>,
}

impl ProductCollection {
    /// Create a collection titled after its handle.
    #[must_use]
    pub fn new(handle: CollectionHandle, products: Vec<Product>) -> Self {
        Self {
            handle,
            title: handle.title().to_string(),
            products,
        }
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The full set of product collections.
#[derive(Debug, Clone)]
pub struct Catalog {
    marine: ProductCollection,
    farming: ProductCollection,
    sustainable: ProductCollection,
    equipment: ProductCollection,
}

impl Catalog {
    /// The built-in MarineHarvest catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            marine: ProductCollection::new(CollectionHandle::Marine, data::marine_products()),
            farming: ProductCollection::new(CollectionHandle::Farming, data::farming_products()),
            sustainable: ProductCollection::new(
                CollectionHandle::Sustainable,
                data::sustainable_products(),
            ),
            equipment: ProductCollection::new(
                CollectionHandle::Equipment,
                data::equipment_products(),
            ),
        }
    }

    /// Build a catalog from explicit collections.
    ///
    /// Every handle missing from `collections` resolves to an empty
    /// collection. Later entries win when a handle appears twice.
    #[must_use]
    pub fn from_collections(collections: Vec<ProductCollection>) -> Self {
        let mut catalog = Self {
            marine: ProductCollection::new(CollectionHandle::Marine, Vec::new()),
            farming: ProductCollection::new(CollectionHandle::Farming, Vec::new()),
            sustainable: ProductCollection::new(CollectionHandle::Sustainable, Vec::new()),
            equipment: ProductCollection::new(CollectionHandle::Equipment, Vec::new()),
        };
        for collection in collections {
            let handle = collection.handle;
            *catalog.slot_mut(handle) = collection;
        }
        catalog
    }

    /// Get a collection by handle.
    #[must_use]
    pub const fn collection(&self, handle: CollectionHandle) -> &ProductCollection {
        match handle {
            CollectionHandle::Marine => &self.marine,
            CollectionHandle::Farming => &self.farming,
            CollectionHandle::Sustainable => &self.sustainable,
            CollectionHandle::Equipment => &self.equipment,
        }
    }

    /// Iterate collections in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductCollection> {
        CollectionHandle::ALL
            .into_iter()
            .map(move |handle| self.collection(handle))
    }

    fn slot_mut(&mut self, handle: CollectionHandle) -> &mut ProductCollection {
        match handle {
            CollectionHandle::Marine => &mut self.marine,
            CollectionHandle::Farming => &mut self.farming,
            CollectionHandle::Sustainable => &mut self.sustainable,
            CollectionHandle::Equipment => &mut self.equipment,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
