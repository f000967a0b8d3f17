pub mod item;
pub mod phone;
pub mod stocked;
pub mod inventory;
pub mod loader;
pub mod numeric;

pub use item::Item;
pub use phone::Phone;
pub use stocked::{StockKind, Stocked};
pub use inventory::{Inventory, Listing, DEFAULT_DISCOUNT};
pub use loader::ItemRecord;
pub use numeric::is_integer;

/// Catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{field} {value} cannot be negative")]
    InvalidArgument {
        field: &'static str,
        value: f64,
    },

    #[error("Row {row}: {field} {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
