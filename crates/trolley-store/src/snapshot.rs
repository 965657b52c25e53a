//! # Cart Snapshot
//!
//! The read surface handed to the frontend: items, totals, and a
//! display-ready total string.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use trolley_core::{Cart, CartTotals, LineItem};

use crate::config::StoreConfig;

/// A point-in-time copy of the cart for rendering.
///
/// ## Design Notes
/// A snapshot is a detached value. Mutating the store after a snapshot
/// was taken does not change the snapshot, and two snapshots taken with
/// no mutation in between are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Items in insertion order
    pub items: Vec<LineItem>,

    /// Aggregate numbers (distinct entries, unit count, total cents)
    pub totals: CartTotals,

    /// Total preformatted with the configured currency, e.g. "$59.98"
    pub display_total: String,
}

impl CartSnapshot {
    /// Builds a snapshot using the store's display configuration.
    pub fn new(cart: &Cart, config: &StoreConfig) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            display_total: config.format_currency(cart.total()),
        }
    }
}
