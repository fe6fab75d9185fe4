//! # Domain Types
//!
//! Core domain types used throughout the Bazaar storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  id (UUID)      │   │  product_id     │       │
//! │  │  title          │   │  method         │   │  *_snapshot     │       │
//! │  │  price_cents    │   │  total_cents    │   │  quantity       │       │
//! │  │  image/category │   │  status         │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PaymentMethod   │   │  OrderStatus    │   │  PurchaseLine   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Upi            │   │  Processing     │   │  product        │       │
//! │  │  CreditCard     │   │  Shipped        │   │  quantity       │       │
//! │  │  CashOnDelivery │   │  Delivered      │   │  (buy-now input)│       │
//! │  └─────────────────┘   │  Cancelled      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem` freezes product data at purchase time. A committed order never
//! observes later catalog or cart changes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product from the external catalog.
///
/// The core never fetches products itself; they arrive fully formed from the
/// catalog lookup the UI performs. The core also does not validate freshness
/// or existence beyond what is passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier. Opaque to the core (the catalog may use numeric
    /// ids serialized as strings).
    pub id: String,

    /// Display title shown on product cards and receipts.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Product image URL.
    pub image: String,

    /// Catalog category (e.g. "electronics", "jewelery").
    pub category: String,

    /// Longer description for the product detail screen.
    pub description: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order was paid for.
///
/// The UI sends the method as an open string; the session boundary parses it
/// into this enum so the core only ever sees a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Unified Payments Interface transfer.
    #[serde(rename = "UPI")]
    Upi,
    /// Credit card payment.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Pay the courier on delivery.
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// The label the storefront displays and sends over the wire.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Parses a boundary string into a payment method.
    ///
    /// ## Behavior
    /// Case-insensitive, accepts a few common aliases ("card", "cod").
    /// Returns `None` for anything else; rejection is the boundary's job.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "upi" => Some(PaymentMethod::Upi),
            "credit card" | "card" | "credit" => Some(PaymentMethod::CreditCard),
            "cash on delivery" | "cod" | "cash" => Some(PaymentMethod::CashOnDelivery),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The fulfillment status of a completed order.
///
/// Every order starts as `Processing`. The current core never transitions the
/// status; the variants beyond `Processing` exist so the field can carry
/// fulfillment updates later without a data model change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    /// Order accepted, payment recorded.
    Processing,
    /// Order handed to the courier.
    Shipped,
    /// Order received by the customer.
    Delivered,
    /// Order cancelled before delivery.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in a completed order.
/// Uses the snapshot pattern to freeze product data at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// Title at time of purchase (frozen).
    pub title_snapshot: String,
    /// Image URL at time of purchase (frozen).
    pub image_snapshot: String,
    /// Category at time of purchase (frozen).
    pub category_snapshot: String,
    /// Description at time of purchase (frozen).
    pub description_snapshot: String,
    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,
    /// Quantity purchased.
    pub quantity: i64,
    /// Line total (unit_price × quantity), computed once at purchase time.
    pub line_total_cents: i64,
}

impl OrderItem {
    /// Snapshots a product at a given quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        OrderItem {
            product_id: product.id.clone(),
            title_snapshot: product.title.clone(),
            image_snapshot: product.image.clone(),
            category_snapshot: product.category.clone(),
            description_snapshot: product.description.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            line_total_cents: product.price_cents * quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Purchase Line
// =============================================================================

/// One product plus a quantity, supplied inline by the buy-now path.
///
/// ## Behavior
/// The quantity is chosen on the product detail screen before checkout.
/// A quantity below 1 is clamped to 1 (the storefront treats a missing
/// quantity as "one of this item").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseLine {
    pub product: Product,
    pub quantity: i64,
}

impl PurchaseLine {
    /// Creates a purchase line, clamping the quantity to a floor of 1.
    pub fn new(product: Product, quantity: i64) -> Self {
        PurchaseLine {
            product,
            quantity: quantity.max(1),
        }
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An immutable record of a completed purchase.
///
/// ## Immutability
/// `items` and `total_cents` are fixed at creation and never recomputed, even
/// if catalog prices change afterwards. Only `status` may transition in a
/// future fulfillment flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Deep snapshot of the purchased lines.
    pub items: Vec<OrderItem>,
    /// How the order was paid.
    pub method: PaymentMethod,
    /// Grand total in cents, computed once at purchase time.
    pub total_cents: i64,
    /// Fulfillment status; starts as `Processing`.
    pub status: OrderStatus,
    /// When the purchase was completed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Calendar date of the purchase (what the history screen shows).
    #[inline]
    pub fn placed_on(&self) -> NaiveDate {
        self.placed_at.date_naive()
    }

    /// Number of distinct lines in the order.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
