//! Cart commands against the persisted cart slot.
//!
//! Each invocation restores the cart from `--data-dir`, applies one
//! operation and writes it back, so the storefront server and the CLI see
//! the same cart when pointed at the same directory.
//!
//! # Usage
//!
//! ```bash
//! mh-cli cart add marine oysters-dozen
//! mh-cli cart increase oysters-dozen
//! mh-cli --data-dir /var/lib/marine-harvest cart show
//! ```

use std::path::Path;

use marine_harvest_core::{Catalog, CollectionHandle};
use marine_harvest_storefront::cart::{CartStore, Checkout};
use marine_harvest_storefront::notification::{Notice, NotificationKind};
use marine_harvest_storefront::storage::FileStore;

use super::CommandError;

/// Cart store backed by the data directory.
pub type FileCart = CartStore<FileStore>;

/// Restore the cart stored under `data_dir`, creating the directory if needed.
pub fn open(data_dir: &Path) -> Result<FileCart, CommandError> {
    let storage = FileStore::open(data_dir)?;
    Ok(CartStore::open(storage))
}

fn report(notice: &Notice) {
    match notice.kind {
        NotificationKind::Error => tracing::warn!("{}", notice.message),
        NotificationKind::Success | NotificationKind::Info => {
            tracing::info!("{}", notice.message);
        }
    }
}

/// Log each line and the cart total.
pub fn show(cart: &FileCart) {
    if cart.is_empty() {
        tracing::info!("Your cart is empty");
        return;
    }

    for line in cart.lines() {
        tracing::info!(
            "  {:<20} {:>3} x {:>9} = {:>9}  {}",
            line.product.id,
            line.quantity,
            line.product.price,
            line.subtotal(),
            line.product.name
        );
    }
    tracing::info!("{} items, total {}", cart.item_count(), cart.total());
}

/// Add one unit of `product_id` from the collection `handle`.
pub fn add(cart: &mut FileCart, handle: &str, product_id: &str) -> Result<(), CommandError> {
    let handle: CollectionHandle = handle.parse()?;
    let catalog = Catalog::builtin();

    match cart.add_item(catalog.collection(handle), product_id) {
        Some(notice) => report(&notice),
        None => tracing::warn!("No product {product_id} in {handle}"),
    }
    Ok(())
}

pub fn remove(cart: &mut FileCart, product_id: &str) {
    match cart.remove_item(product_id) {
        Some(notice) => report(&notice),
        None => tracing::warn!("{product_id} is not in the cart"),
    }
}

pub fn increase(cart: &mut FileCart, product_id: &str) {
    if cart.increase_quantity(product_id) {
        if let Some(line) = cart.line(product_id) {
            tracing::info!("{} x {}", line.product.name, line.quantity);
        }
    } else {
        tracing::warn!("{product_id} is not in the cart");
    }
}

pub fn decrease(cart: &mut FileCart, product_id: &str) {
    let before = cart.line(product_id).is_some();
    if let Some(notice) = cart.decrease_quantity(product_id) {
        report(&notice);
    } else if let Some(line) = cart.line(product_id) {
        tracing::info!("{} x {}", line.product.name, line.quantity);
    } else if !before {
        tracing::warn!("{product_id} is not in the cart");
    }
}

pub fn clear(cart: &mut FileCart) {
    report(&cart.clear());
}

/// Place the order. Fails with [`CommandError::EmptyCart`] when there is
/// nothing to buy.
pub fn checkout(cart: &mut FileCart) -> Result<(), CommandError> {
    match cart.checkout() {
        Checkout::Completed {
            notice,
            item_count,
            total,
        } => {
            tracing::info!("Ordered {item_count} items for {total}");
            report(&notice);
            Ok(())
        }
        Checkout::EmptyCart(_) => Err(CommandError::EmptyCart),
    }
}
