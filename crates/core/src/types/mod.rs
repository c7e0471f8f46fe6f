//! Core types for MarineHarvest.
//!
//! This module provides type-safe wrappers for the storefront domain.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartDecodeError, CartLine, Decrement};
pub use id::ProductId;
pub use price::{Price, PriceError};
pub use product::Product;
