use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::Item;

/// Concrete stock variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockKind {
    Item,
    Phone,
}

impl StockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockKind::Item => "Item",
            StockKind::Phone => "Phone",
        }
    }
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every stock variant
pub trait Stocked {
    /// The shared base record
    fn item(&self) -> &Item;

    fn kind(&self) -> StockKind;

    fn total_price(&self) -> f64 {
        let item = self.item();
        item.price * item.quantity
    }

    /// Total price reduced by a fractional `rate`
    fn discounted_price(&self, rate: f64) -> f64 {
        self.total_price() * (1.0 - rate)
    }
}
