//! Shopping cart lines and the cart aggregate.
//!
//! The cart is an ordered list of lines, unique by product ID. Quantities
//! are `NonZeroU32`, so a line with zero quantity cannot exist: reducing a
//! line below one removes it.
//!
//! # Wire format
//!
//! A cart serializes as a bare JSON array:
//!
//! ```json
//! [{ "product": { "id": "salmon-premium", "price": 24.99, ... }, "quantity": 2 }]
//! ```
//!
//! Deserialization validates the shape: zero quantities, negative prices and
//! duplicate product IDs are all rejected.

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Price, Product, ProductId};

/// Errors decoding a persisted cart.
#[derive(Debug, Error)]
pub enum CartDecodeError {
    /// The payload was empty.
    #[error("cart payload is empty")]
    Empty,

    /// The payload was not a well-formed cart array.
    #[error("malformed cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two lines referenced the same product.
    #[error("duplicate cart line for product {0}")]
    DuplicateProduct(ProductId),
}

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// A new line holding one unit of `product`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Price of this line (`price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price * self.quantity.get()
    }
}

/// Result of decrementing a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decrement {
    /// The line still exists with the new quantity.
    Decremented(NonZeroU32),
    /// The line had quantity one and was removed.
    Removed(CartLine),
    /// No line for that product.
    Missing,
}

/// The cart aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if any.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add one unit of `product`, creating the line if needed.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> NonZeroU32 {
        if let Some(line) = self.line_mut(product.id.as_str()) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        let line = CartLine::new(product.clone());
        let quantity = line.quantity;
        self.lines.push(line);
        quantity
    }

    /// Remove the line for `product_id`.
    pub fn remove(&mut self, product_id: &str) -> Option<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Increase an existing line by one. Returns `None` if there is no line.
    pub fn increment(&mut self, product_id: &str) -> Option<NonZeroU32> {
        let line = self.line_mut(product_id)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Decrease an existing line by one, removing it when it reaches zero.
    pub fn decrement(&mut self, product_id: &str) -> Decrement {
        let Some(line) = self.line_mut(product_id) else {
            return Decrement::Missing;
        };

        match NonZeroU32::new(line.quantity.get() - 1) {
            Some(quantity) => {
                line.quantity = quantity;
                Decrement::Decremented(quantity)
            }
            None => self
                .remove(product_id)
                .map_or(Decrement::Missing, Decrement::Removed),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Serialize to the persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted cart, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `CartDecodeError` for empty payloads, malformed JSON, zero
    /// quantities, negative prices or duplicate product IDs.
    pub fn from_json(payload: &str) -> Result<Self, CartDecodeError> {
        if payload.trim().is_empty() {
            return Err(CartDecodeError::Empty);
        }
        Ok(serde_json::from_str(payload)?)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartDecodeError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if !seen.insert(line.product.id.as_str()) {
                return Err(CartDecodeError::DuplicateProduct(line.product.id.clone()));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            image: format!("https://images.example/{id}.jpg"),
            category: "Fish".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_same_product_keeps_single_line() {
        let salmon = product("salmon-premium", 2499);
        let mut cart = Cart::new();

        for _ in 0..4 {
            cart.add(&salmon);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.line("salmon-premium").map(|l| l.quantity.get()),
            Some(4)
        );
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_decrement_removes_line_at_one() {
        let mut cart = Cart::new();
        cart.add(&product("oysters-dozen", 3499));

        match cart.decrement("oysters-dozen") {
            Decrement::Removed(line) => assert_eq!(line.product.id, "oysters-dozen"),
            other => panic!("expected removal, got {other:?}"),
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_above_one_keeps_line() {
        let lobster = product("lobster-live", 4599);
        let mut cart = Cart::new();
        cart.add(&lobster);
        cart.add(&lobster);
        cart.add(&lobster);

        assert_eq!(
            cart.decrement("lobster-live"),
            Decrement::Decremented(NonZeroU32::new(2).expect("non-zero"))
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_missing_lines_are_noops() {
        let mut cart = Cart::new();
        cart.add(&product("seabass-fresh", 1899));
        let before = cart.clone();

        assert_eq!(cart.decrement("nope"), Decrement::Missing);
        assert_eq!(cart.increment("nope"), None);
        assert!(cart.remove("nope").is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let salmon = product("salmon-premium", 2499);
        let bass = product("seabass-fresh", 1899);
        let mut cart = Cart::new();

        cart.add(&salmon);
        cart.add(&bass);
        cart.increment("salmon-premium");
        assert_eq!(cart.total(), Price::from_cents(2499 * 2 + 1899));

        cart.decrement("seabass-fresh");
        assert_eq!(cart.total(), Price::from_cents(2499 * 2));

        cart.clear();
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_json_rejects_zero_quantity() {
        let payload = r#"[{"product":{"id":"a","name":"A","price":1.0,"image":"","category":"Fish","description":""},"quantity":0}]"#;
        assert!(matches!(
            Cart::from_json(payload),
            Err(CartDecodeError::Json(_))
        ));
    }

    #[test]
    fn test_json_rejects_duplicate_products() {
        let line = r#"{"product":{"id":"a","name":"A","price":1.0,"image":"","category":"Fish","description":""},"quantity":1}"#;
        let payload = format!("[{line},{line}]");
        let err = Cart::from_json(&payload).expect_err("duplicate ids");
        assert!(err.to_string().contains("duplicate cart line"));
    }

    #[test]
    fn test_json_rejects_price_above_cap() {
        let payload = r#"[{"product":{"id":"a","name":"A","price":70000000000000000000000000000,"image":"","category":"Fish","description":""},"quantity":2}]"#;
        assert!(matches!(
            Cart::from_json(payload),
            Err(CartDecodeError::Json(_))
        ));
    }

    #[test]
    fn test_json_rejects_empty_payload() {
        assert!(matches!(Cart::from_json("  "), Err(CartDecodeError::Empty)));
    }
}
