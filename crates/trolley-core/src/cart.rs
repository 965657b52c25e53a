//! # Cart Aggregate
//!
//! The shopping cart: an ordered list of line items plus stored totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  Shopper Action           Cart Operation          State Change          │
//! │  ──────────────           ──────────────          ────────────          │
//! │                                                                         │
//! │  Click "Add to cart" ───► add_item() ───────────► new entry, or +1      │
//! │                                                   unit if id present    │
//! │                                                                         │
//! │  Click "+" ─────────────► increase_item() ──────► quantity + 1          │
//! │                                                                         │
//! │  Click "-" ─────────────► decrease_item() ──────► quantity - 1          │
//! │                                                   (entry removed at 0)  │
//! │                                                                         │
//! │  Click trash icon ──────► remove_item() ────────► entry removed         │
//! │                                                                         │
//! │  View cart ─────────────► items()/count()/... ──► (read only)           │
//! │                                                                         │
//! │  NOTE: count and total are updated by the SAME operation that changes   │
//! │        the item list. Readers never recompute them.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::item::LineItem;
use crate::money::Money;
use crate::validation::{
    validate_item_id, validate_item_name, validate_price_cents, validate_quantity,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id increases quantity)
/// - Every entry has quantity >= 1 (reaching 0 removes the entry)
/// - `count` always equals the sum of entry quantities
/// - `total` always equals the sum of entry line totals
/// - At most MAX_CART_ITEMS entries; each quantity <= MAX_ITEM_QUANTITY
///
/// ## Encapsulation
/// Fields are private so the stored aggregates cannot drift from the item
/// list. The cart serializes out to the frontend but is never deserialized
/// back; changes enter through the operations on this type.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in insertion order
    items: Vec<LineItem>,

    /// Total units across all entries (a quantity-3 entry contributes 3)
    count: i64,

    /// Sum of line totals, in cents
    total_cents: i64,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            count: 0,
            total_cents: 0,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds a candidate item to the cart.
    ///
    /// ## Behavior
    /// - If the id is already in the cart: behaves exactly like
    ///   [`increase_item`](Self::increase_item). One more unit of the
    ///   existing entry; the candidate's quantity, price and display
    ///   fields are ignored.
    /// - If the id is new: the candidate is validated and appended, and
    ///   the aggregates grow by its full quantity and line total.
    ///
    /// ## Errors
    /// - `Validation` if a new candidate has an empty id, empty name,
    ///   negative price, or a quantity outside 1..=MAX_ITEM_QUANTITY
    /// - `CartFull` if the cart already holds MAX_CART_ITEMS entries
    /// - `QuantityTooLarge` if a duplicate add would push the entry past
    ///   MAX_ITEM_QUANTITY
    ///
    /// On error the cart is unchanged.
    pub fn add_item(&mut self, candidate: LineItem) -> CartResult<()> {
        // Same id twice never creates a second entry
        if self.contains(&candidate.id) {
            return self.increase_item(&candidate.id);
        }

        validate_item_id(&candidate.id)?;
        validate_item_name(&candidate.name)?;
        validate_price_cents(candidate.price_cents)?;
        validate_quantity(candidate.quantity)?;

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CartError::CartFull {
                max: MAX_CART_ITEMS,
            });
        }

        self.count += candidate.quantity;
        self.total_cents += candidate.line_total().cents();
        self.items.push(candidate);
        Ok(())
    }

    /// Increases the quantity of an existing entry by one.
    ///
    /// ## Errors
    /// - `ItemNotFound` if no entry has this id
    /// - `QuantityTooLarge` if the entry is already at MAX_ITEM_QUANTITY
    pub fn increase_item(&mut self, id: &str) -> CartResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            let new_qty = item.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            let unit_price_cents = item.price_cents;

            self.count += 1;
            self.total_cents += unit_price_cents;
            Ok(())
        } else {
            Err(CartError::ItemNotFound { id: id.to_string() })
        }
    }

    /// Decreases the quantity of an existing entry by one.
    ///
    /// ## Behavior
    /// Reaching quantity 0 removes the entry. The cart never holds a
    /// zero-quantity row.
    ///
    /// ## Errors
    /// - `ItemNotFound` if no entry has this id
    pub fn decrease_item(&mut self, id: &str) -> CartResult<()> {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Err(CartError::ItemNotFound { id: id.to_string() });
        };

        let item = &mut self.items[pos];
        item.quantity -= 1;
        let (remaining, unit_price_cents) = (item.quantity, item.price_cents);

        self.count -= 1;
        self.total_cents -= unit_price_cents;

        if remaining == 0 {
            self.items.remove(pos);
        }
        Ok(())
    }

    /// Removes an entry from the cart, whatever its quantity.
    ///
    /// Returns the removed entry so callers can log it or offer undo.
    ///
    /// ## Errors
    /// - `ItemNotFound` if no entry has this id
    pub fn remove_item(&mut self, id: &str) -> CartResult<LineItem> {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Err(CartError::ItemNotFound { id: id.to_string() });
        };

        let removed = self.items.remove(pos);
        self.count -= removed.quantity;
        self.total_cents -= removed.line_total().cents();
        Ok(removed)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.count = 0;
        self.total_cents = 0;
        self.created_at = Utc::now();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total units across all entries.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Total price of the cart.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Checks whether an entry with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    // =========================================================================
    // Recomputed Aggregates
    // =========================================================================

    /// Recomputes the unit count from the item list.
    ///
    /// Always equal to [`count`](Self::count); exists so audits and tests
    /// can check the stored aggregate against ground truth.
    pub fn summed_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Recomputes the total from the item list.
    ///
    /// Always equal to [`total`](Self::total); exists so audits and tests
    /// can check the stored aggregate against ground truth.
    pub fn summed_total(&self) -> Money {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Money::zero(), |acc, line| acc + line)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct entries
    pub distinct_items: usize,

    /// Total units across all entries
    pub count: i64,

    /// Total price in cents
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            distinct_items: cart.len(),
            count: cart.count(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
