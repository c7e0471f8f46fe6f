//! CLI command implementations.

pub mod cart;
pub mod catalog;

use marine_harvest_core::catalog::UnknownCollection;
use marine_harvest_core::listing::UnknownSortOrder;
use marine_harvest_storefront::storage::StorageError;
use thiserror::Error;

/// Errors that can occur running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Collection handle not recognized.
    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollection),

    /// Sort order not recognized.
    #[error(transparent)]
    UnknownSortOrder(#[from] UnknownSortOrder),

    /// Data directory unusable.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,
}
