//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use marine_harvest_core::listing::categories;
use marine_harvest_core::{
    CategoryFilter, CollectionHandle, ListingQuery, Product, SortOrder,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Collection summary for the collection index.
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    pub handle: CollectionHandle,
    pub title: String,
    pub product_count: usize,
}

/// Listing query parameters.
///
/// `category` defaults to `All`, `q` to no search, `sort` to `featured`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl ListingParams {
    fn into_query(self) -> Result<ListingQuery> {
        let sort = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        Ok(ListingQuery {
            category: self
                .category
                .map_or(CategoryFilter::All, CategoryFilter::from),
            search: self.q.unwrap_or_default(),
            sort,
        })
    }
}

/// Collection listing response.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub handle: CollectionHandle,
    pub title: String,
    pub categories: Vec<CategoryFilter>,
    pub query: ListingQuery,
    pub searching: bool,
    pub count: usize,
    pub products: Vec<Product>,
}

/// List all collections.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<CollectionSummary>> {
    let summaries = state
        .catalog()
        .iter()
        .map(|collection| CollectionSummary {
            handle: collection.handle,
            title: collection.title.clone(),
            product_count: collection.len(),
        })
        .collect();

    Json(summaries)
}

/// Filtered, sorted product listing for one collection.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingView>> {
    let handle: CollectionHandle = handle.parse()?;
    let query = params.into_query()?;
    let collection = state.catalog().collection(handle);

    let listing = query.apply(&collection.products);
    tracing::debug!(
        collection = %handle,
        count = listing.count(),
        "Listing built"
    );

    Ok(Json(ListingView {
        handle,
        title: collection.title.clone(),
        categories: categories(&collection.products),
        searching: query.is_searching(),
        count: listing.count(),
        products: listing.into_products().into_iter().cloned().collect(),
        query,
    }))
}

/// Category labels for one collection (`All` first).
#[instrument(skip(state))]
pub async fn categories_for(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Vec<CategoryFilter>>> {
    let handle: CollectionHandle = handle.parse()?;
    let collection = state.catalog().collection(handle);
    Ok(Json(categories(&collection.products)))
}
