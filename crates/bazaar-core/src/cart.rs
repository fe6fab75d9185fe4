//! # Cart
//!
//! The active shopping cart: an ordered list of product lines with quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Engine Operation        Cart Change           │
//! │  ─────────────────        ────────────────        ───────────           │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► add_product() ───────► qty +1 or new line   │
//! │                                                                         │
//! │  Tap "+" on a line ──────► increase_quantity() ─► qty +1               │
//! │                                                                         │
//! │  Tap "−" on a line ──────► decrease_quantity() ─► qty −1 (floor 1)     │
//! │                                                                         │
//! │  Tap trash icon ─────────► remove() ────────────► line deleted         │
//! │                                                                         │
//! │  Checkout completes ─────► clear() ─────────────► all lines deleted    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity Floor
//! `decrease_quantity` never drops a line below quantity 1 and never removes
//! it. Removal is always an explicit, separate gesture. This matches the
//! storefront UI, where "−" at quantity 1 does nothing and deletion has its
//! own button.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: identity of the line; at most one line per product id
/// - Remaining product fields are a frozen copy taken when the product was
///   first added, so the cart displays consistent data even if the catalog
///   changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog product id (line identity).
    pub product_id: String,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Description at time of adding (frozen).
    pub description: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product, with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// later, this line retains the original price.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product increments
///   the quantity)
/// - Every line's quantity is >= 1
/// - Insertion order is preserved for new lines; re-adding a previously
///   removed product appends a new tail line (its old position is forgotten)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - If the product already has a line: increments its quantity by 1
    /// - Otherwise: appends a new line with quantity 1
    ///
    /// Always succeeds; there are no error conditions on this path.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product));
    }

    /// Removes the line for a product id.
    ///
    /// ## Behavior
    /// Absence is not an error: removing a product that has no line is a
    /// no-op. Returns whether a line was actually removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Increments the quantity of a line by 1.
    ///
    /// No-op if the product has no line in the cart.
    pub fn increase_quantity(&mut self, product_id: &str) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity += 1;
        }
    }

    /// Decrements the quantity of a line by 1, with a floor of 1.
    ///
    /// ## Behavior
    /// - Quantity > 1: decrement
    /// - Quantity == 1: no-op (the line is never auto-removed; removal
    ///   requires an explicit `remove`)
    /// - Product not in cart: no-op
    pub fn decrease_quantity(&mut self, product_id: &str) {
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    /// Returns the number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart subtotal in cents.
    ///
    /// Recomputed on every call from the current lines; never cached, so it
    /// is always consistent with the cart state.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Returns the cart subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
