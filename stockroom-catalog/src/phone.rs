use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::{ensure_non_negative, write_constructor, Item};
use crate::stocked::{StockKind, Stocked};
use crate::CatalogResult;

/// Phone stock: an item plus a count of defective units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(flatten)]
    pub item: Item,
    pub broken_phones: u64,
}

impl Phone {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: f64,
        broken_phones: i64,
    ) -> CatalogResult<Self> {
        let item = Item::new(name, price, quantity)?;
        ensure_non_negative("Broken Phones", broken_phones as f64)?;

        Ok(Self {
            item,
            broken_phones: broken_phones.unsigned_abs(),
        })
    }
}

impl Stocked for Phone {
    fn item(&self) -> &Item {
        &self.item
    }

    fn kind(&self) -> StockKind {
        StockKind::Phone
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_constructor(f, self)
    }
}
