//! # Session Commands
//!
//! Command-style entry points the storefront UI invokes.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Shopping │────►│ Payment  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Screen  │     │ History  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart      complete_purchase                   │
//! │                   increase/                                             │
//! │                   decrease_quantity                                     │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   stage_for_checkout ──► "Buy Now" bypasses the cart   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Placement
//! Catalog payloads and payment-method strings are validated here, at the
//! boundary. The engine's own mutations never fail; anything this module
//! lets through is absorbed by the engine as a state change or a no-op.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::SessionState;
use bazaar_core::validation::{
    validate_cart_size, validate_payment_method, validate_product, validate_quantity,
};
use bazaar_core::{Cart, CartLine, Order, Product, PurchaseLine};

// =============================================================================
// Response DTOs
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// What the payment screen receives after a successful purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    pub total_cents: i64,
    pub item_count: usize,
}

/// One buy-now line as the frontend sends it: a catalog product plus the
/// quantity picked on the product screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyNowLine {
    pub product: Product,
    pub quantity: i64,
}

// =============================================================================
// Cart Commands
// =============================================================================

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and calculated totals.
pub fn get_cart(state: &SessionState) -> CartResponse {
    debug!("get_cart command");
    state.with_engine(|e| CartResponse::from(e.cart()))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as a new line with quantity 1
/// - Price is "frozen" at time of adding (won't change if the catalog
///   price updates)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User taps "Add to Cart" on a product card                             │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  addToCart({ id, title, priceCents, image, category, description })    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Validate the catalog payload                               │    │
/// │  │  2. Already in cart? increment : append new line               │    │
/// │  │  3. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Cart badge and totals update                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// Updated cart with all lines and totals.
pub fn add_to_cart(state: &SessionState, product: Product) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product.id, "add_to_cart command");

    validate_product(&product).map_err(|e| ApiError::validation(e.to_string()))?;

    state.with_engine_mut(|e| {
        // The size cap only gates NEW lines; incrementing an existing line
        // at the cap is fine.
        if e.cart().line(&product.id).is_none() {
            validate_cart_size(e.cart().line_count())
                .map_err(|err| ApiError::validation(err.to_string()))?;
        }

        e.add_to_cart(&product);
        Ok(CartResponse::from(e.cart()))
    })
}

/// Removes a product's line from the cart.
///
/// Absence is not an error; removing an unknown product id leaves the cart
/// unchanged.
///
/// ## Returns
/// Updated cart.
pub fn remove_from_cart(state: &SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    state.with_engine_mut(|e| {
        let removed = e.remove_from_cart(product_id);
        if !removed {
            debug!(product_id = %product_id, "remove_from_cart: no such line");
        }
        CartResponse::from(e.cart())
    })
}

/// Increments a line's quantity by 1. No-op for unknown product ids.
///
/// ## Returns
/// Updated cart.
pub fn increase_quantity(state: &SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity command");

    state.with_engine_mut(|e| {
        e.increase_quantity(product_id);
        CartResponse::from(e.cart())
    })
}

/// Decrements a line's quantity by 1, flooring at 1.
///
/// ## Behavior
/// The "−" button never removes a line: at quantity 1 this is a no-op and
/// the frontend renders the button disabled. Removal is its own command.
///
/// ## Returns
/// Updated cart.
pub fn decrease_quantity(state: &SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity command");

    state.with_engine_mut(|e| {
        e.decrease_quantity(product_id);
        CartResponse::from(e.cart())
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User empties the cart from the cart screen
/// - (Checkout clears the cart itself as part of the purchase transition)
///
/// ## Returns
/// Empty cart.
pub fn clear_cart(state: &SessionState) -> CartResponse {
    debug!("clear_cart command");

    state.with_engine_mut(|e| {
        e.clear_cart();
        CartResponse::from(e.cart())
    })
}

// =============================================================================
// Buy-Now Staging
// =============================================================================

/// Sets or clears the staged "buy now" product.
///
/// ## Behavior
/// - `Some(product)`: validates and stages it, overwriting any prior stage
/// - `None`: clears the stage
///
/// Staging is independent of the cart: it does not remove the product from
/// the cart, and cart checkout leaves the stage alone.
///
/// ## Returns
/// The staged product after the call.
pub fn stage_for_checkout(
    state: &SessionState,
    product: Option<Product>,
) -> Result<Option<Product>, ApiError> {
    debug!(staging = product.is_some(), "stage_for_checkout command");

    if let Some(ref p) = product {
        validate_product(p).map_err(|e| ApiError::validation(e.to_string()))?;
    }

    Ok(state.with_engine_mut(|e| {
        e.stage_for_checkout(product);
        e.staged_item().cloned()
    }))
}

/// Gets the currently staged buy-now product, if any.
pub fn get_staged_item(state: &SessionState) -> Option<Product> {
    debug!("get_staged_item command");
    state.with_engine(|e| e.staged_item().cloned())
}

// =============================================================================
// Checkout
// =============================================================================

/// Completes a purchase.
///
/// ## Source Resolution
/// 1. `buy_now_lines`, if supplied — the buy-now path, with quantities
///    chosen on the product screen
/// 2. else the staged item, if one is set (single line, quantity 1)
/// 3. else the full current cart
///
/// Exactly one source is cleared on success: the cart for a cart checkout,
/// the stage for a buy-now. The other is left untouched.
///
/// ## Arguments
/// * `method` - Payment method as the frontend sends it ("UPI",
///   "Credit Card", "Cash on Delivery"); parsed and rejected here if unknown
/// * `buy_now_lines` - Inline snapshot for the buy-now path, or `None` for a
///   staged/cart checkout
///
/// ## Errors
/// - `VALIDATION_ERROR` for unknown payment methods or malformed lines
/// - `BUSINESS_LOGIC` when there is nothing to purchase (empty cart, no
///   stage, or an empty explicit list); history does not grow
pub fn complete_purchase(
    state: &SessionState,
    method: &str,
    buy_now_lines: Option<Vec<BuyNowLine>>,
) -> Result<CheckoutResponse, ApiError> {
    debug!(method = %method, buy_now = buy_now_lines.is_some(), "complete_purchase command");

    let method = validate_payment_method(method).map_err(|e| ApiError::validation(e.to_string()))?;

    let explicit_items = match buy_now_lines {
        Some(lines) => {
            let mut items = Vec::with_capacity(lines.len());
            for line in lines {
                validate_product(&line.product)
                    .map_err(|e| ApiError::validation(e.to_string()))?;
                validate_quantity(line.quantity)
                    .map_err(|e| ApiError::validation(e.to_string()))?;
                items.push(PurchaseLine::new(line.product, line.quantity));
            }
            Some(items)
        }
        None => None,
    };

    let order = state.with_engine_mut(|e| e.complete_purchase(method, explicit_items))?;

    info!(
        order_id = %order.id,
        total = %order.total(),
        items = order.item_count(),
        method = %order.method,
        "Purchase completed"
    );

    Ok(CheckoutResponse {
        order_id: order.id,
        total_cents: order.total_cents,
        item_count: order.items.len(),
    })
}

/// Gets the purchase history, most recent order first.
///
/// Orders are frozen snapshots; they render directly without further
/// transformation.
pub fn get_purchase_history(state: &SessionState) -> Vec<Order> {
    debug!("get_purchase_history command");
    state.with_engine(|e| e.history().to_vec())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            price_cents,
            image: format!("https://example.com/{}.png", id),
            category: "electronics".to_string(),
            description: format!("Description for product {}", id),
        }
    }

    #[test]
    fn test_add_to_cart_rejects_bad_payload() {
        let state = SessionState::new();
        let mut product = test_product("1", 999);
        product.title = String::new();

        let err = add_to_cart(&state, product).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&state).totals.line_count, 0);
    }

    #[test]
    fn test_add_to_cart_returns_updated_totals() {
        let state = SessionState::new();
        let product = test_product("1", 999);

        add_to_cart(&state, product.clone()).unwrap();
        let response = add_to_cart(&state, product).unwrap();

        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.total_quantity, 2);
        assert_eq!(response.totals.subtotal_cents, 1998);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let state = SessionState::new();
        add_to_cart(&state, test_product("1", 999)).unwrap();

        let response = remove_from_cart(&state, "missing");
        assert_eq!(response.totals.line_count, 1);
    }

    #[test]
    fn test_decrease_quantity_floors_at_one() {
        let state = SessionState::new();
        add_to_cart(&state, test_product("1", 999)).unwrap();

        for _ in 0..3 {
            let response = decrease_quantity(&state, "1");
            assert_eq!(response.lines[0].quantity, 1);
        }
    }

    #[test]
    fn test_complete_purchase_rejects_unknown_method() {
        let state = SessionState::new();
        add_to_cart(&state, test_product("1", 999)).unwrap();

        let err = complete_purchase(&state, "wire transfer", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Rejected before the engine ran: cart intact, no history.
        assert_eq!(get_cart(&state).totals.line_count, 1);
        assert!(get_purchase_history(&state).is_empty());
    }

    #[test]
    fn test_complete_purchase_empty_session() {
        let state = SessionState::new();

        let err = complete_purchase(&state, "UPI", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert!(get_purchase_history(&state).is_empty());
    }

    #[test]
    fn test_buy_now_quantity_validated_at_boundary() {
        let state = SessionState::new();
        let line = BuyNowLine {
            product: test_product("1", 999),
            quantity: 0,
        };

        let err = complete_purchase(&state, "UPI", Some(vec![line])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cart_response_serializes_camel_case() {
        let state = SessionState::new();
        add_to_cart(&state, test_product("1", 999)).unwrap();

        let json = serde_json::to_value(get_cart(&state)).unwrap();
        assert_eq!(json["totals"]["subtotalCents"], 999);
        assert_eq!(json["lines"][0]["product_id"], "1");
    }
}
