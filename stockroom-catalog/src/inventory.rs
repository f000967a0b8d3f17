use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::item::Item;
use crate::loader;
use crate::phone::Phone;
use crate::stocked::Stocked;
use crate::CatalogResult;

/// Discount rate a fresh inventory starts with
pub const DEFAULT_DISCOUNT: f64 = 0.2;

/// Owns the shared discount rate and the registries of every constructed
/// item and phone. Registries are append-only and independent of each other.
#[derive(Debug, Clone)]
pub struct Inventory {
    discount: f64,
    items: Vec<Item>,
    phones: Vec<Phone>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_discount(DEFAULT_DISCOUNT)
    }

    pub fn with_discount(discount: f64) -> Self {
        Self {
            discount,
            items: Vec::new(),
            phones: Vec::new(),
        }
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Applies to every later `apply_discount` call
    pub fn set_discount(&mut self, discount: f64) {
        self.discount = discount;
    }

    /// Construct and register an item
    pub fn create_item(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: f64,
    ) -> CatalogResult<&mut Item> {
        let item = Item::new(name, price, quantity)?;
        let index = self.items.len();
        self.items.push(item);
        Ok(&mut self.items[index])
    }

    /// Construct and register a phone. Only the phone registry grows.
    pub fn create_phone(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: f64,
        broken_phones: i64,
    ) -> CatalogResult<&mut Phone> {
        let phone = Phone::new(name, price, quantity, broken_phones)?;
        let index = self.phones.len();
        self.phones.push(phone);
        Ok(&mut self.phones[index])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn phones_mut(&mut self) -> &mut [Phone] {
        &mut self.phones
    }

    /// Total price reduced by the current shared rate
    pub fn apply_discount<S: Stocked + ?Sized>(&self, stock: &S) -> f64 {
        stock.discounted_price(self.discount)
    }

    /// Bulk-load items from CSV. Returns how many were registered.
    ///
    /// Stops at the first invalid record; records registered before it stay.
    pub fn load_items<R: Read>(&mut self, reader: R) -> CatalogResult<usize> {
        let records = loader::read_records(reader)?;
        let total = records.len();

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            let (price, quantity) = record.parse_numbers(row)?;
            self.create_item(record.name, price, quantity)?;
        }

        tracing::info!("Loaded {} items, registry now holds {}", total, self.items.len());
        Ok(total)
    }

    pub fn load_items_from_path(&mut self, path: impl AsRef<Path>) -> CatalogResult<usize> {
        let path = path.as_ref();
        tracing::debug!("Loading items from {}", path.display());
        let file = File::open(path)?;
        self.load_items(file)
    }

    pub fn items_listing(&self) -> Listing<'_, Item> {
        Listing(&self.items)
    }

    pub fn phones_listing(&self) -> Listing<'_, Phone> {
        Listing(&self.phones)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry rendering: `[Item('A', '10', '3'), Item('B', '2.5', '1')]`
pub struct Listing<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}
