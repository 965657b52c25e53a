//! # Validation Module
//!
//! Candidate line item validation for the Trolley cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart boundary (Rust)                                          │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: candidate checks before the cart is touched           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants                                               │
//! │  ├── Unique entry per item id                                           │
//! │  └── Stored aggregates always match the item list                       │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::validation::{validate_item_id, validate_quantity};
//!
//! // Validate before a cart insert
//! validate_item_id("sneaker-42").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
/// - No format is imposed beyond that: ids are opaque to the cart.
///   The catalog decides what an id looks like; the cart only compares
///   them for equality.
///
/// ## Example
/// ```rust
/// use trolley_core::validation::validate_item_id;
///
/// assert!(validate_item_id("sneaker-42").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
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

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use trolley_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Classic Sneakers").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0); a zero-quantity entry is unrepresentable,
///   the cart removes entries instead of keeping them at zero
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

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, samples)
///
/// ## Example
/// ```rust
/// use trolley_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
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

// =============================================================================
// Unit Tests
// =============================================================================
