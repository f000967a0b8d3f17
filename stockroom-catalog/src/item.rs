use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stocked::{StockKind, Stocked};
use crate::{CatalogError, CatalogResult};

/// Named, priced, quantity-tracked inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units on hand, may be fractional
    pub quantity: f64,
}

impl Item {
    /// Validate and build an item. Fields are not re-checked after this.
    pub fn new(name: impl Into<String>, price: f64, quantity: f64) -> CatalogResult<Self> {
        ensure_non_negative("Price", price)?;
        ensure_non_negative("Quantity", quantity)?;

        Ok(Self {
            name: name.into(),
            price,
            quantity,
        })
    }
}

impl Stocked for Item {
    fn item(&self) -> &Item {
        self
    }

    fn kind(&self) -> StockKind {
        StockKind::Item
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_constructor(f, self)
    }
}

/// `NaN` fails as well, since the comparison is false.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> CatalogResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidArgument { field, value })
    }
}

/// Renders `Kind('name', 'price', 'quantity')`
pub(crate) fn write_constructor<S: Stocked + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    stock: &S,
) -> fmt::Result {
    let item = stock.item();
    write!(
        f,
        "{}('{}', '{}', '{}')",
        stock.kind(),
        item.name,
        item.price,
        item.quantity
    )
}
