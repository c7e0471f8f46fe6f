//! Catalog view model: category filter, text search and sort.
//!
//! A [`ListingQuery`] is applied to a collection's products in a fixed
//! order, each stage consuming the previous stage's output:
//!
//! 1. Category filter (`All` keeps everything, otherwise exact match)
//! 2. Text search over name and description, ignoring case
//! 3. Stable sort by the selected [`SortOrder`]
//!
//! An empty result is a normal outcome ("no products found"), never an error.
//!
//! # Example
//!
//! ```rust
//! use marine_harvest_core::{Catalog, CategoryFilter, CollectionHandle, ListingQuery, SortOrder};
//!
//! let catalog = Catalog::builtin();
//! let marine = catalog.collection(CollectionHandle::Marine);
//!
//! let listing = ListingQuery::default()
//!     .with_category(CategoryFilter::only("Shellfish"))
//!     .with_sort(SortOrder::PriceAsc)
//!     .apply(&marine.products);
//!
//! assert_eq!(listing.count(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use feruca::Collator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Product;

/// Label of the sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Selected category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Sentinel: keep every product.
    #[default]
    All,
    /// Keep products whose category matches exactly (case-sensitive).
    Only(String),
}

impl CategoryFilter {
    /// Filter on a single category label.
    #[must_use]
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Display label (the sentinel renders as "All").
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Whether `product` passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Error parsing a sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

/// Sort key for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Collection order, no reordering.
    #[default]
    #[serde(alias = "default")]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Sort `products` in place. The sort is stable.
    pub fn sort(self, products: &mut [&Product]) {
        match self {
            Self::Featured => {}
            Self::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::NameAsc => {
                let mut collator = Collator::default();
                products.sort_by(|a, b| compare_names(&mut collator, &a.name, &b.name));
            }
            Self::NameDesc => {
                let mut collator = Collator::default();
                products.sort_by(|a, b| compare_names(&mut collator, &b.name, &a.name));
            }
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "default" {
            return Ok(Self::Featured);
        }
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

/// Compare display names with the Unicode Collation Algorithm under the
/// CLDR root locale, so `"Éclair"` sorts among the `e`s rather than after
/// `z`. Names that collate equal fall back to code-point order.
#[must_use]
pub fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// User-entered listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl ListingQuery {
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a text search is active (non-blank after trimming).
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Run the filter/search/sort pipeline over `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Listing<'a> {
        let needle = self.is_searching().then(|| self.search.to_lowercase());

        let mut selected: Vec<&Product> = products
            .iter()
            .filter(|product| self.category.matches(product))
            .filter(|product| {
                needle
                    .as_deref()
                    .is_none_or(|needle| product.matches_lowercase(needle))
            })
            .collect();

        self.sort.sort(&mut selected);

        Listing { products: selected }
    }
}

/// Ordered display list produced by [`ListingQuery::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a> {
    products: Vec<&'a Product>,
}

impl<'a> Listing<'a> {
    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// True when the "no products found" state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }
}

/// Categories available for a collection: the `All` sentinel followed by
/// each distinct category in order of first appearance.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];
    for product in products {
        if !categories
            .iter()
            .any(|c| matches!(c, CategoryFilter::Only(existing) if *existing == product.category))
        {
            categories.push(CategoryFilter::Only(product.category.clone()));
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, ProductId};

    fn product(id: &str, name: &str, cents: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: String::new(),
            category: category.to_string(),
            description: format!("{name} from pristine waters."),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("salmon-premium", "Premium Atlantic Salmon", 2499, "Fish"),
            product("seabass-fresh", "Fresh Sea Bass", 1899, "Fish"),
            product("oysters-dozen", "Fresh Oysters", 3499, "Shellfish"),
            product("lobster-live", "Live Lobster", 4599, "Shellfish"),
        ]
    }

    fn ids(listing: &Listing<'_>) -> Vec<String> {
        listing
            .products()
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_default_query_keeps_collection_order() {
        let products = fixture();
        let listing = ListingQuery::default().apply(&products);
        assert_eq!(
            ids(&listing),
            ["salmon-premium", "seabass-fresh", "oysters-dozen", "lobster-live"]
        );
    }

    #[test]
    fn test_category_filter_is_exact() {
        let products = fixture();
        let listing = ListingQuery::default()
            .with_category(CategoryFilter::only("Shellfish"))
            .apply(&products);
        assert_eq!(listing.count(), 2);

        let listing = ListingQuery::default()
            .with_category(CategoryFilter::only("shellfish"))
            .apply(&products);
        assert!(listing.is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let products = fixture();
        let listing = ListingQuery::default()
            .with_search("SALMON")
            .apply(&products);
        assert_eq!(ids(&listing), ["salmon-premium"]);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let products = fixture();
        let listing = ListingQuery::default().with_search("   ").apply(&products);
        assert_eq!(listing.count(), products.len());
    }

    #[test]
    fn test_search_applies_after_category() {
        let products = fixture();
        let listing = ListingQuery::default()
            .with_category(CategoryFilter::only("Fish"))
            .with_search("fresh")
            .apply(&products);
        assert_eq!(ids(&listing), ["seabass-fresh"]);
    }

    #[test]
    fn test_price_sort_both_directions() {
        let products = vec![
            product("a", "A", 2499, "Fish"),
            product("b", "B", 1899, "Fish"),
            product("c", "C", 3499, "Fish"),
        ];

        let prices = |sort| {
            ListingQuery::default()
                .with_sort(sort)
                .apply(&products)
                .products()
                .iter()
                .map(|p| p.price)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            prices(SortOrder::PriceAsc),
            [
                Price::from_cents(1899),
                Price::from_cents(2499),
                Price::from_cents(3499)
            ]
        );
        assert_eq!(
            prices(SortOrder::PriceDesc),
            [
                Price::from_cents(3499),
                Price::from_cents(2499),
                Price::from_cents(1899)
            ]
        );
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            product("first", "First", 1000, "Fish"),
            product("cheap", "Cheap", 500, "Fish"),
            product("second", "Second", 1000, "Fish"),
        ];
        let listing = ListingQuery::default()
            .with_sort(SortOrder::PriceAsc)
            .apply(&products);
        assert_eq!(ids(&listing), ["cheap", "first", "second"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let products = vec![
            product("b", "banded Grouper", 100, "Fish"),
            product("a", "Atlantic Cod", 100, "Fish"),
            product("c", "Clam", 100, "Shellfish"),
        ];
        let asc = ListingQuery::default()
            .with_sort(SortOrder::NameAsc)
            .apply(&products);
        assert_eq!(ids(&asc), ["a", "b", "c"]);

        let desc = ListingQuery::default()
            .with_sort(SortOrder::NameDesc)
            .apply(&products);
        assert_eq!(ids(&desc), ["c", "b", "a"]);
    }

    #[test]
    fn test_name_sort_places_accented_letters_with_their_base() {
        let products = vec![
            product("z", "Zander Fillet", 100, "Fish"),
            product("e", "Éclair Shrimp", 100, "Shellfish"),
            product("a", "apple", 100, "Fish"),
        ];
        let asc = ListingQuery::default()
            .with_sort(SortOrder::NameAsc)
            .apply(&products);
        assert_eq!(ids(&asc), ["a", "e", "z"]);

        let desc = ListingQuery::default()
            .with_sort(SortOrder::NameDesc)
            .apply(&products);
        assert_eq!(ids(&desc), ["z", "e", "a"]);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let products = vec![
            product("a", "A", 1, "Shellfish"),
            product("b", "B", 1, "Fish"),
            product("c", "C", 1, "Shellfish"),
            product("d", "D", 1, "Seaweed"),
        ];
        let labels: Vec<String> = categories(&products)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(labels, ["All", "Shellfish", "Fish", "Seaweed"]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("price-asc".parse::<SortOrder>(), Ok(SortOrder::PriceAsc));
        assert_eq!("default".parse::<SortOrder>(), Ok(SortOrder::Featured));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Featured));
        assert!("cheapest".parse::<SortOrder>().is_err());

        let parsed: SortOrder = serde_json::from_str("\"name-desc\"").expect("deserialize");
        assert_eq!(parsed, SortOrder::NameDesc);
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Fish"),
            CategoryFilter::Only("Fish".to_string())
        );
    }
}
