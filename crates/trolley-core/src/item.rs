//! # Line Item
//!
//! A single entry in the shopping cart: one catalog item plus the
//! quantity of it the shopper is holding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// An entry in the shopping cart.
///
/// ## Design Notes
/// - `id`: opaque catalog identifier. The cart never parses it, it only
///   compares ids for equality.
/// - Name, image and price are frozen at the moment of adding. If the
///   catalog changes afterwards, the cart keeps showing what the shopper
///   accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog item id (unique within the cart)
    pub id: String,

    /// Display name at time of adding (frozen)
    pub name: String,

    /// Image URL at time of adding (frozen)
    pub image_url: String,

    /// Unit price in cents at time of adding (frozen)
    /// This is critical: we lock in the price when added to cart
    pub price_cents: i64,

    /// Quantity in cart (always >= 1; a zero-quantity entry is removed)
    pub quantity: i64,

    /// When this item was added to cart
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from catalog data.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// later, this entry retains the original price.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            price_cents: price.cents(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// The frozen unit price as `Money`.
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem::new(
            "sneaker-42",
            "Classic Sneakers",
            "/images/sneaker-42.png",
            Money::from_cents(2999),
            3,
        );

        assert_eq!(item.price().cents(), 2999);
        assert_eq!(item.line_total().cents(), 8997);
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = LineItem::new(
            "sneaker-42",
            "Classic Sneakers",
            "/images/sneaker-42.png",
            Money::from_cents(2999),
            1,
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "sneaker-42");
        assert_eq!(json["imageUrl"], "/images/sneaker-42.png");
        assert_eq!(json["priceCents"], 2999);
        assert!(json["addedAt"].is_string());
    }

    #[test]
    fn test_round_trips_through_json() {
        let item = LineItem::new(
            "mug-7",
            "Camp Mug",
            "/images/mug-7.png",
            Money::from_cents(1250),
            2,
        );

        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
