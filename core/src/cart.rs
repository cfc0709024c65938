//! Cart Store
//!
//! Holds the current session's cart. Adding a product that is already in
//! the cart increments its quantity instead of duplicating the entry, so
//! the cart never holds more than one line per product id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A cart line: a product plus the quantity ordered (always >= 1)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product ordered
    pub product: Product,
    /// How many units (>= 1)
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price x quantity
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The session's cart.
///
/// All mutations apply fully before the next render snapshot is taken;
/// there is no partial state visible to callers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into the existing line when the product is already present.
    /// A zero quantity is treated as 1; callers always add at least one.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            tracing::debug!(product = %product.id, quantity = item.quantity, "cart line incremented");
        } else {
            tracing::debug!(product = %product.id, quantity, "cart line added");
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Remove the line for a product id. No-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Remove the line at a 0-based ordinal position. No-op when out of range.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            tracing::debug!(product = %removed.product.id, "cart line removed");
        }
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Order total, computed freshly on each call
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total units across all lines (for the menu badge)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All lines in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
