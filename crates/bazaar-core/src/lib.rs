//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar storefront. It contains the
//! cart/checkout state machine as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bazaar Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Storefront Frontend (React Native)               │   │
//! │  │   Browse ──► Product Detail ──► Cart ──► Checkout ──► History   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-session                               │   │
//! │  │    get_cart, add_to_cart, complete_purchase, etc.               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  engine   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │CartEngine │  │   │
//! │  │   │   Order   │  │  totals   │  │ CartLine  │  │ checkout  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CATALOG FETCH • NO NETWORK • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart and its quantity arithmetic
//! - [`engine`] - The checkout state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is a direct transform of local state
//! 2. **No I/O**: Catalog, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Frozen Orders**: Committed orders are deep snapshots; later cart or
//!    catalog mutation can never alter them
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::{CartEngine, CheckoutSource, PaymentMethod, Product};
//!
//! let jacket = Product {
//!     id: "3".to_string(),
//!     title: "Mens Cotton Jacket".to_string(),
//!     price_cents: 5599,
//!     image: "https://example.com/jacket.png".to_string(),
//!     category: "men's clothing".to_string(),
//!     description: "Great outerwear jacket".to_string(),
//! };
//!
//! let mut engine = CartEngine::new();
//! engine.add_to_cart(&jacket);
//! engine.add_to_cart(&jacket); // same product: quantity becomes 2
//!
//! let order = engine
//!     .checkout(PaymentMethod::Upi, CheckoutSource::Cart)
//!     .unwrap();
//!
//! assert_eq!(order.total_cents, 11198);
//! assert!(engine.cart().is_empty());
//! assert_eq!(engine.history().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartLine};
pub use engine::{CartEngine, CheckoutSource};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps checkout payloads reasonable. Enforced by
/// boundary validation, not by the engine itself — engine mutations stay
/// infallible.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
