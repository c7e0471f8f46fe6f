//! MarineHarvest Core - Shared types library.
//!
//! This crate provides the types and pure logic used across all MarineHarvest
//! components:
//! - `storefront` - Cart store, notification channel and JSON API
//! - `cli` - Command-line access to the catalog and the persisted cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage, no timers. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtypes and records for products, prices and cart lines
//! - [`catalog`] - The built-in product collections
//! - [`listing`] - Category/search/sort view model over a collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod listing;
pub mod types;

pub use catalog::{Catalog, CollectionHandle, ProductCollection};
pub use listing::{CategoryFilter, Listing, ListingQuery, SortOrder};
pub use types::*;
