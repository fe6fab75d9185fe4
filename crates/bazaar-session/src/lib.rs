//! # bazaar-session: Session State + Command API
//!
//! The in-process surface the storefront UI consumes. This crate owns the
//! one concern [`bazaar_core`] must not: shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Storefront Frontend (React Native)                      │
//! │        Cart screen ── Product detail ── Payment ── History              │
//! └──────────────────────────────┬──────────────────────────────────────────┘
//!                                │ command invocations
//! ┌──────────────────────────────▼──────────────────────────────────────────┐
//! │                   bazaar-session (THIS CRATE)                           │
//! │                                                                         │
//! │   SessionState (Arc<Mutex<CartEngine>>)                                 │
//! │   api: get_cart / add_to_cart / stage_for_checkout /                    │
//! │        complete_purchase / get_purchase_history ...                     │
//! │   ApiError: serializable { code, message }                              │
//! └──────────────────────────────┬──────────────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────────────────┐
//! │                  bazaar-core (pure, lock-free)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use bazaar_core::Product;
//! use bazaar_session::{api, SessionState};
//!
//! let state = SessionState::new();
//!
//! let earbuds = Product {
//!     id: "42".to_string(),
//!     title: "Wireless Earbuds".to_string(),
//!     price_cents: 3499,
//!     image: "https://example.com/earbuds.png".to_string(),
//!     category: "electronics".to_string(),
//!     description: "Noise-cancelling earbuds".to_string(),
//! };
//!
//! api::add_to_cart(&state, earbuds).unwrap();
//! let receipt = api::complete_purchase(&state, "UPI", None).unwrap();
//! assert_eq!(receipt.total_cents, 3499);
//! ```

pub mod api;
pub mod error;
pub mod state;

pub use api::{BuyNowLine, CartResponse, CartTotals, CheckoutResponse};
pub use error::{ApiError, ErrorCode};
pub use state::SessionState;
