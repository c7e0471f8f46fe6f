//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! mh-cli collections
//! mh-cli products marine --category Fish
//! mh-cli products equipment --sort name-desc
//! mh-cli categories sustainable
//! ```

use marine_harvest_core::listing;
use marine_harvest_core::{
    Catalog, CategoryFilter, CollectionHandle, ListingQuery, Product, SortOrder,
};

use super::CommandError;

/// Log every collection with its product count.
pub fn collections() {
    let catalog = Catalog::builtin();
    for collection in catalog.iter() {
        tracing::info!(
            "{:<12} {} ({} products)",
            collection.handle,
            collection.title,
            collection.len()
        );
    }
}

/// Build the listing for `handle` and log each product.
///
/// Returns the listed products in display order.
pub fn products(
    handle: &str,
    category: Option<String>,
    search: Option<String>,
    sort: Option<&str>,
) -> Result<Vec<Product>, CommandError> {
    let handle: CollectionHandle = handle.parse()?;
    let sort = sort.map(str::parse::<SortOrder>).transpose()?.unwrap_or_default();

    let query = ListingQuery::default()
        .with_category(category.map_or(CategoryFilter::All, CategoryFilter::from))
        .with_search(search.unwrap_or_default())
        .with_sort(sort);

    let catalog = Catalog::builtin();
    let collection = catalog.collection(handle);
    let listing = query.apply(&collection.products);

    tracing::info!(
        "{} - {} ({}, sorted {})",
        collection.title,
        query.category,
        if listing.is_empty() {
            "no matches".to_string()
        } else {
            format!("{} products", listing.count())
        },
        query.sort
    );

    let products: Vec<Product> = listing.into_products().into_iter().cloned().collect();
    for product in &products {
        tracing::info!(
            "  {:<20} {:>9}  {:<28} [{}]",
            product.id,
            product.price,
            product.name,
            product.category
        );
    }

    Ok(products)
}

/// Log the category options for `handle`, `All` first.
pub fn categories(handle: &str) -> Result<Vec<CategoryFilter>, CommandError> {
    let handle: CollectionHandle = handle.parse()?;
    let catalog = Catalog::builtin();
    let categories = listing::categories(&catalog.collection(handle).products);

    for category in &categories {
        tracing::info!("  {category}");
    }

    Ok(categories)
}
