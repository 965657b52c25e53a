//! # trolley-core: Pure Cart Business Logic
//!
//! This crate is the **heart** of Trolley. It contains the cart aggregate
//! and its rules as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (product list, cart view)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / subscriptions              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    trolley-store                                │   │
//! │  │        CartStore: locking, change notification, DTOs            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   cart    │  │   item    │  │   money   │  │ validation│   │   │
//! │  │   │   Cart    │  │ LineItem  │  │   Money   │  │   rules   │   │   │
//! │  │   │CartTotals │  │line_total │  │   cents   │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE LOGIC            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart aggregate and its operations
//! - [`item`] - Line item type (frozen catalog data plus quantity)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Candidate item validation
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, shared state access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use trolley_core::{Cart, LineItem, Money};
//!
//! let mut cart = Cart::new();
//!
//! // Add one pair of sneakers at $29.99
//! let sneakers = LineItem::new(
//!     "sneaker-42",
//!     "Classic Sneakers",
//!     "/images/sneaker-42.png",
//!     Money::from_cents(2999),
//!     1,
//! );
//! cart.add_item(sneakers).unwrap();
//!
//! // Adding the same id again bumps the quantity instead
//! cart.increase_item("sneaker-42").unwrap();
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total().cents(), 5998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod item;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Cart` instead of
// `use trolley_core::cart::Cart`

pub use cart::{Cart, CartTotals};
pub use error::{CartError, CartResult, ValidationError};
pub use item::LineItem;
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps snapshots cheap to clone and send.
/// Can be made configurable per-deployment in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., holding "+" or typing 1000
/// instead of 10). Configurable per-deployment in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
