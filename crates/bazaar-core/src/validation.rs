//! # Validation Module
//!
//! Boundary validation utilities for the Bazaar storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (storefront screens)                                │
//! │  ├── Basic format checks (empty cart prompt, method picker)            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session command (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: catalog payloads, quantities, payment methods        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (bazaar-core)                                         │
//! │  └── Absorbs remaining precondition violations as no-ops               │
//! │                                                                         │
//! │  The engine's mutations stay infallible; anything worth rejecting      │
//! │  is rejected here, before it reaches the engine.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_payment_method, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! let method = validate_payment_method("UPI").unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{PaymentMethod, Product};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a catalog product id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
///
/// The id is otherwise opaque: the catalog may use numeric ids, UUIDs, or
/// slugs, and the core does not care which.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product image URL.
///
/// ## Rules
/// - Must not be empty
/// - Must start with `http://` or `https://`
pub fn validate_image_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a full catalog product payload before it enters the engine.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_title(&product.title)?;
    validate_price_cents(product.price_cents)?;
    validate_image_url(&product.image)?;
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Payment Method
// =============================================================================

/// Parses and validates a boundary payment-method string.
///
/// ## Rules
/// The storefront constrains the picker to UPI, Credit Card, and Cash on
/// Delivery; anything else is rejected with the allowed set in the error.
pub fn validate_payment_method(value: &str) -> ValidationResult<PaymentMethod> {
    PaymentMethod::parse(value).ok_or_else(|| ValidationError::NotAllowed {
        field: "payment method".to_string(),
        allowed: vec![
            PaymentMethod::Upi.label().to_string(),
            PaymentMethod::CreditCard.label().to_string(),
            PaymentMethod::CashOnDelivery.label().to_string(),
        ],
    })
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of unique lines).
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product {
            id: "42".to_string(),
            title: "Wireless Earbuds".to_string(),
            price_cents: 3499,
            image: "https://example.com/earbuds.png".to_string(),
            category: "electronics".to_string(),
            description: "Noise-cancelling earbuds".to_string(),
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("42").is_ok());
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"a".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_title() {
        assert!(validate_product_title("Wireless Earbuds").is_ok());
        assert!(validate_product_title("").is_err());
        assert!(validate_product_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("https://example.com/a.png").is_ok());
        assert!(validate_image_url("http://example.com/a.png").is_ok());
        assert!(validate_image_url("").is_err());
        assert!(validate_image_url("ftp://example.com/a.png").is_err());
        assert!(validate_image_url("not a url").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&test_product()).is_ok());

        let mut bad = test_product();
        bad.price_cents = -1;
        assert!(validate_product(&bad).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_payment_method() {
        assert_eq!(
            validate_payment_method("UPI").unwrap(),
            PaymentMethod::Upi
        );
        assert_eq!(
            validate_payment_method("Cash on Delivery").unwrap(),
            PaymentMethod::CashOnDelivery
        );
        assert!(validate_payment_method("wire transfer").is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }
}
