//! Cart route handlers.
//!
//! Every mutation responds with the updated cart plus the notification it
//! published (if any), so a client can render both from one response.
//! Unknown product IDs are silent no-ops: the response carries the
//! unchanged cart and no notification.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marine_harvest_core::{CartLine, CollectionHandle, Price};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{CartStore, Checkout};
use crate::error::{Result, add_breadcrumb};
use crate::notification::{Notice, Notification};
use crate::state::{AppState, SharedStore};

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
    pub line_total_display: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub total: Price,
    pub total_display: String,
    pub is_open: bool,
}

/// Response for every cart endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub cart: CartView,
    pub notification: Option<Notification>,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let line_total = line.subtotal();
        Self {
            product_id: line.product.id.to_string(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            category: line.product.category.clone(),
            unit_price: line.product.price,
            quantity: line.quantity.get(),
            line_total,
            line_total_display: line_total.to_string(),
        }
    }
}

impl From<&CartStore<SharedStore>> for CartView {
    fn from(store: &CartStore<SharedStore>) -> Self {
        let total = store.total();
        Self {
            lines: store.lines().iter().map(CartLineView::from).collect(),
            item_count: store.item_count(),
            total,
            total_display: total.to_string(),
            is_open: store.is_open(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub collection: String,
    pub product_id: String,
}

/// Form naming an existing cart line.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub product_id: String,
}

/// Apply `op` to the cart, publish its notice and build the response.
///
/// The notice is published while the cart lock is held, so the surviving
/// notification always belongs to the latest mutation.
fn mutate(
    state: &AppState,
    op: impl FnOnce(&mut CartStore<SharedStore>) -> Option<Notice>,
) -> CartResponse {
    state.with_cart(|store| {
        let notice = op(store);
        CartResponse {
            cart: CartView::from(&*store),
            notification: state.publish(notice),
        }
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(state.with_cart(|store| CartView::from(&*store)))
}

/// Add one unit of a product from a collection.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartResponse>> {
    let handle: CollectionHandle = form.collection.parse()?;
    let collection = state.catalog().collection(handle);

    add_breadcrumb(
        "cart",
        "Add to cart",
        Some(&[
            ("collection", handle.as_str()),
            ("product_id", &form.product_id),
        ]),
    );

    Ok(Json(mutate(&state, |store| {
        store.add_item(collection, &form.product_id)
    })))
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Json<CartResponse> {
    add_breadcrumb(
        "cart",
        "Remove from cart",
        Some(&[("product_id", &form.product_id)]),
    );
    Json(mutate(&state, |store| store.remove_item(&form.product_id)))
}

/// Increase a line's quantity by one.
#[instrument(skip(state))]
pub async fn increase(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Json<CartResponse> {
    Json(mutate(&state, |store| {
        store.increase_quantity(&form.product_id);
        None
    }))
}

/// Decrease a line's quantity by one, removing it at one.
#[instrument(skip(state))]
pub async fn decrease(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Json<CartResponse> {
    Json(mutate(&state, |store| store.decrease_quantity(&form.product_id)))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartResponse> {
    add_breadcrumb("cart", "Clear cart", None);
    Json(mutate(&state, |store| Some(store.clear())))
}

/// Open the cart view.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> Json<CartResponse> {
    Json(mutate(&state, |store| {
        store.open_view();
        None
    }))
}

/// Close the cart view.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> Json<CartResponse> {
    Json(mutate(&state, |store| {
        store.close_view();
        None
    }))
}

/// Toggle the cart view.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>) -> Json<CartResponse> {
    Json(mutate(&state, |store| {
        store.toggle_view();
        None
    }))
}

/// Place the order.
///
/// Responds 200 when the order completes and 422 when the cart is empty;
/// both carry the notification.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Response {
    let (status, response) = state.with_cart(|store| {
        let outcome = store.checkout();
        let status = match &outcome {
            Checkout::Completed {
                item_count, total, ..
            } => {
                add_breadcrumb(
                    "checkout",
                    "Checkout completed",
                    Some(&[
                        ("item_count", &item_count.to_string()),
                        ("total", &total.to_string()),
                    ]),
                );
                StatusCode::OK
            }
            Checkout::EmptyCart(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let response = CartResponse {
            cart: CartView::from(&*store),
            notification: state.publish(Some(outcome.into_notice())),
        };
        (status, response)
    });

    (status, Json(response)).into_response()
}
