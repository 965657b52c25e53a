//! # Error Types
//!
//! Domain-specific error types for trolley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trolley-core errors (this file)                                        │
//! │  ├── CartError        - Cart operation failures                         │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  trolley-store (separate crate)                                         │
//! │  └── Returns CartError unchanged; the embedding host decides how        │
//! │      to surface it (toast, disabled button, log line)                   │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → host UI                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, limits)
//! 3. Errors are enum variants, never String
//! 4. A missing item is an error value, not a panic

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart business logic errors.
///
/// These errors represent business rule violations or cart operation
/// failures. They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CartError {
    /// The targeted item id is not in the cart.
    ///
    /// ## When This Occurs
    /// - A quantity or removal control fires for an id that was already
    ///   removed (stale click)
    /// - The caller passes an id that was never added
    ///
    /// ## User Workflow
    /// ```text
    /// Click "+" on item "sneaker-42"
    ///      │
    ///      ▼
    /// Cart lookup: no entry with id "sneaker-42"
    ///      │
    ///      ▼
    /// ItemNotFound { id: "sneaker-42" }
    ///      │
    ///      ▼
    /// UI refreshes the cart view; no panic, no phantom row
    /// ```
    #[error("Item not found in cart: {id}")]
    ItemNotFound { id: String },

    /// Cart has reached the maximum number of distinct items.
    #[error("Cart cannot have more than {max} distinct items")]
    CartFull { max: usize },

    /// Item quantity would exceed maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a candidate line item doesn't meet requirements.
/// Used for early validation before the cart is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::ItemNotFound {
            id: "sneaker-42".to_string(),
        };
        assert_eq!(err.to_string(), "Item not found in cart: sneaker-42");

        let err = CartError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1000 exceeds maximum allowed (999)"
        );

        let err = CartError::CartFull { max: 100 };
        assert_eq!(
            err.to_string(),
            "Cart cannot have more than 100 distinct items"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
