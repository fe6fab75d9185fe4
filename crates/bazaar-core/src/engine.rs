//! # Checkout Engine
//!
//! Owns the cart, the staged "buy now" target, and the purchase history, and
//! implements the one transition that commits either purchase path into an
//! immutable order.
//!
//! ## Purchase Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Ways to Buy                                      │
//! │                                                                         │
//! │  CART CHECKOUT                        BUY NOW                           │
//! │  ─────────────                        ───────                           │
//! │                                                                         │
//! │  add_to_cart(p1)                      stage_for_checkout(Some(p))       │
//! │  add_to_cart(p2)                            │                           │
//! │       │                               user picks quantity on the        │
//! │       ▼                               product screen                    │
//! │  checkout(method,                           │                           │
//! │      CheckoutSource::Cart)                  ▼                           │
//! │       │                               checkout(method,                  │
//! │       │                                   ExplicitItems(lines))         │
//! │       ▼                                     │                           │
//! │  Order appended to history,                 ▼                           │
//! │  cart cleared                         Order appended to history,        │
//! │                                       stage cleared, cart UNTOUCHED     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exactly One Side Effect, Exactly One Source Cleared
//! A successful checkout grows history by exactly one order and clears
//! exactly one of the two state sources (cart or stage). The two paths share
//! this one routine without cross-contaminating each other's state: a cart
//! checkout never drops a staged item, and a buy-now never empties the cart.

use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, OrderItem, OrderStatus, PaymentMethod, Product, PurchaseLine};

// =============================================================================
// Checkout Source
// =============================================================================

/// Which state the purchase set is drawn from.
///
/// ## Why a Tagged Variant?
/// The storefront's two purchase paths used to be disambiguated by inspecting
/// what happened to be non-empty at call time. Making the source an explicit
/// value turns the precedence into a type-level choice: the caller says what
/// it is buying, and the engine clears only that source on success.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutSource {
    /// Buy the entire current cart. Clears the cart on success.
    Cart,
    /// Buy the staged item as a single line of quantity 1.
    /// Clears the stage on success.
    StagedItem,
    /// Buy an inline snapshot of lines (the buy-now path, with quantities
    /// chosen on the product screen). Leaves the cart untouched; clears the
    /// stage on success if one is set, since the staging that produced these
    /// lines is finished.
    ExplicitItems(Vec<PurchaseLine>),
}

// =============================================================================
// Cart Engine
// =============================================================================

/// The cart/checkout state machine.
///
/// One engine instance is one shopping session. Consumers hold a reference
/// and call its operations; nothing here reaches into ambient global state,
/// which keeps the engine unit-testable without a UI harness.
///
/// ## State
/// - `cart`: the active shopping cart
/// - `staged`: optional single "buy now" product, independent of the cart
/// - `history`: completed orders, most-recent-first, append-only
#[derive(Debug, Default)]
pub struct CartEngine {
    cart: Cart,
    staged: Option<Product>,
    history: Vec<Order>,
}

impl CartEngine {
    /// Creates an engine with an empty cart, no staged item, and no history.
    pub fn new() -> Self {
        CartEngine {
            cart: Cart::new(),
            staged: None,
            history: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The staged buy-now product, if any.
    pub fn staged_item(&self) -> Option<&Product> {
        self.staged.as_ref()
    }

    /// Completed orders, most recent first.
    pub fn history(&self) -> &[Order] {
        &self.history
    }

    /// Derived cart total. Recomputed on every call; never cached.
    ///
    /// Covers the cart only — a staged buy-now item does not contribute
    /// (its total is computed at checkout from the explicit lines).
    pub fn total_price(&self) -> Money {
        self.cart.subtotal()
    }

    // -------------------------------------------------------------------------
    // Cart mutations (all infallible; preconditions degrade to no-ops)
    // -------------------------------------------------------------------------

    /// Adds one unit of a product to the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add_product(product);
    }

    /// Removes a product's line from the cart; absence is a no-op.
    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        self.cart.remove(product_id)
    }

    /// Increments a line's quantity; no-op if the product has no line.
    pub fn increase_quantity(&mut self, product_id: &str) {
        self.cart.increase_quantity(product_id);
    }

    /// Decrements a line's quantity with a floor of 1; see [`Cart::decrease_quantity`].
    pub fn decrease_quantity(&mut self, product_id: &str) {
        self.cart.decrease_quantity(product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Sets or clears the staged buy-now target.
    ///
    /// Setting overwrites any prior stage; only one product may be staged at
    /// a time. Staging does not remove the product from the cart.
    pub fn stage_for_checkout(&mut self, product: Option<Product>) {
        self.staged = product;
    }

    // -------------------------------------------------------------------------
    // Completion transition
    // -------------------------------------------------------------------------

    /// Completes a purchase from an explicit source.
    ///
    /// ## Transition
    /// 1. Snapshot the purchase set from the source. An empty set is rejected
    ///    with [`CoreError::NothingToPurchase`] before any state changes.
    /// 2. Total = Σ unit_price × quantity over the snapshot, fixed forever.
    /// 3. Build the order: fresh UUID, deep item snapshots, the method,
    ///    status `Processing`, the current timestamp.
    /// 4. Prepend to history (most-recent-first).
    /// 5. Clear the consumed source (see [`CheckoutSource`]).
    ///
    /// Returns a clone of the committed order.
    pub fn checkout(
        &mut self,
        method: PaymentMethod,
        source: CheckoutSource,
    ) -> CoreResult<Order> {
        // Step 1: resolve the purchase set as deep snapshots. No state is
        // mutated until the set is known to be non-empty.
        let items: Vec<OrderItem> = match &source {
            CheckoutSource::Cart => self.cart.lines.iter().map(snapshot_cart_line).collect(),
            CheckoutSource::StagedItem => self
                .staged
                .iter()
                .map(|p| OrderItem::from_product(p, 1))
                .collect(),
            CheckoutSource::ExplicitItems(lines) => lines
                .iter()
                .map(|l| OrderItem::from_product(&l.product, l.quantity))
                .collect(),
        };

        if items.is_empty() {
            return Err(CoreError::NothingToPurchase);
        }

        // Step 2: total over the snapshot, computed exactly once.
        let total_cents: i64 = items.iter().map(|i| i.line_total_cents).sum();

        // Step 3: the immutable order record.
        let order = Order {
            id: Uuid::new_v4().to_string(),
            items,
            method,
            total_cents,
            status: OrderStatus::Processing,
            placed_at: chrono::Utc::now(),
        };

        // Step 4: history is most-recent-first.
        self.history.insert(0, order.clone());

        // Step 5: clear exactly the source that was consumed.
        match source {
            CheckoutSource::Cart => self.cart.clear(),
            CheckoutSource::StagedItem => self.staged = None,
            CheckoutSource::ExplicitItems(_) => {
                if self.staged.is_some() {
                    self.staged = None;
                }
            }
        }

        Ok(order)
    }

    /// Completes a purchase, resolving the source by the storefront's
    /// priority order.
    ///
    /// ## Resolution
    /// 1. `explicit_items`, if supplied (the buy-now path passes a single
    ///    line with the quantity chosen at staging time)
    /// 2. else the staged item, if one is set (as a single line, quantity 1)
    /// 3. else the full current cart
    ///
    /// An explicit empty list resolves to `ExplicitItems` and is rejected; it
    /// does not fall through to the stage or the cart.
    pub fn complete_purchase(
        &mut self,
        method: PaymentMethod,
        explicit_items: Option<Vec<PurchaseLine>>,
    ) -> CoreResult<Order> {
        let source = match explicit_items {
            Some(lines) => CheckoutSource::ExplicitItems(lines),
            None if self.staged.is_some() => CheckoutSource::StagedItem,
            None => CheckoutSource::Cart,
        };

        self.checkout(method, source)
    }
}

/// Deep-copies a cart line into an order item.
fn snapshot_cart_line(line: &CartLine) -> OrderItem {
    OrderItem {
        product_id: line.product_id.clone(),
        title_snapshot: line.title.clone(),
        image_snapshot: line.image.clone(),
        category_snapshot: line.category.clone(),
        description_snapshot: line.description.clone(),
        unit_price_cents: line.unit_price_cents,
        quantity: line.quantity,
        line_total_cents: line.line_total_cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
