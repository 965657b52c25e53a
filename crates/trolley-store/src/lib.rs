//! # trolley-store: Shared Cart State for Trolley
//!
//! This crate provides the stateful layer of Trolley: one live cart,
//! thread-safe mutation, and push notification of committed changes.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Store Architecture                           │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                 │
//! │  │ Product list │   │  Cart view   │   │  Cart badge  │   Consumers     │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘                 │
//! │         │ add_item()       │ snapshot()        │ subscribe()            │
//! │         ▼                  ▼                   ▼                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      CartStore (this crate)                     │   │
//! │  │                                                                 │   │
//! │  │   Mutex<Cart> ──── one mutation at a time                       │   │
//! │  │   watch channel ── latest committed cart, pushed on commit      │   │
//! │  │   StoreConfig ──── currency display settings                    │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │  ┌────────────────────────────▼────────────────────────────────────┐   │
//! │  │                    trolley-core (pure logic)                    │   │
//! │  │              Cart rules, Money, validation, errors              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`: the shared state holder and its operations
//! - [`snapshot`] - `CartSnapshot`: detached read DTO for the frontend
//! - [`config`] - `StoreConfig`: currency display configuration
//!
//! ## Usage
//!
//! ```rust
//! use trolley_store::{CartStore, LineItem, Money};
//!
//! let store = CartStore::new();
//!
//! // A consumer interested in changes subscribes up front
//! let mut changes = store.subscribe();
//!
//! // Add one item; subscribers are notified of the committed cart
//! let item = LineItem::new(
//!     "sneaker-42",
//!     "Classic Sneakers",
//!     "/images/sneaker-42.png",
//!     Money::from_cents(2999),
//!     1,
//! );
//! store.add_item(item).unwrap();
//!
//! assert!(changes.has_changed().unwrap());
//! assert_eq!(changes.borrow_and_update().count(), 1);
//!
//! // Rendering reads a detached snapshot
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.display_total, "$29.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use snapshot::CartSnapshot;
pub use store::CartStore;

// Core types that appear in this crate's public API
pub use trolley_core::{Cart, CartError, CartResult, CartTotals, LineItem, Money};
