//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (storage reachable)
//!
//! # Catalog
//! GET  /collections                    - Collection summaries
//! GET  /collections/:handle            - Listing (?category=&q=&sort=)
//! GET  /collections/:handle/categories - Category filter options
//!
//! # Cart
//! GET  /cart                           - Current cart
//! POST /cart/add                       - Add one unit (collection, product_id)
//! POST /cart/remove                    - Remove a line (product_id)
//! POST /cart/increase                  - Quantity + 1 (product_id)
//! POST /cart/decrease                  - Quantity - 1, removes at one (product_id)
//! POST /cart/clear                     - Empty the cart
//! POST /cart/open                      - Open the cart view
//! POST /cart/close                     - Close the cart view
//! POST /cart/toggle                    - Toggle the cart view
//!
//! # Checkout
//! POST /checkout                       - Place order (422 when the cart is empty)
//!
//! # Notifications
//! GET    /notification                 - Active notification (204 when none)
//! DELETE /notification                 - Dismiss the active notification
//! ```

pub mod cart;
pub mod catalog;
pub mod notifications;

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use crate::cart::CART_STORAGE_KEY;
use crate::error::Result;
use crate::state::AppState;

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{handle}", get(catalog::show))
        .route("/{handle}/categories", get(catalog::categories_for))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/clear", post(cart::clear))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/toggle", post(cart::toggle))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/collections", collection_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        .route(
            "/notification",
            get(notifications::current).delete(notifications::dismiss),
        )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Reads the cart slot; responds 503 if storage is unreachable.
async fn readiness(State(state): State<AppState>) -> Result<&'static str> {
    state.storage().get(CART_STORAGE_KEY)?;
    Ok("ok")
}
