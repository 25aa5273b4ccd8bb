//! Cart
//!
//! The cart is an ordered ledger: at most one entry per product, new
//! entries append, existing entries keep their position. Aggregates are
//! recomputed on every read. Operations on absent products are silent
//! no-ops, matching the permissive storefront surface.

use rusty_money::{Money, iso::Currency};

use crate::{catalog::Catalog, products::ProductKey};

/// One cart line: a product reference and a quantity of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    key: ProductKey,
    quantity: u32,
}

impl CartEntry {
    /// The product this line refers to.
    #[must_use]
    pub fn key(&self) -> ProductKey {
        self.key
    }

    /// Units of the product in the cart. Always >= 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The cart ledger.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product: increments the existing entry's quantity,
    /// or appends a new entry with quantity one.
    pub fn add(&mut self, key: ProductKey) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.quantity = entry.quantity.saturating_add(1);
        } else {
            self.entries.push(CartEntry { key, quantity: 1 });
        }
    }

    /// Set the quantity of an existing entry. A quantity of zero or less
    /// removes the entry; an absent key is ignored.
    pub fn update_quantity(&mut self, key: ProductKey, quantity: i64) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.quantity = quantity;
        }
    }

    /// Remove an entry if present; an absent key is ignored.
    pub fn remove(&mut self, key: ProductKey) {
        self.entries.retain(|entry| entry.key != key);
    }

    /// Empty the ledger (order placement).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity of a product in the cart, if present.
    #[must_use]
    pub fn quantity_of(&self, key: ProductKey) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(CartEntry::quantity)
    }

    /// Iterate the ledger entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units across all entries. Zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |count, entry| count.saturating_add(entry.quantity))
    }

    /// Total price of the cart in the catalog currency: sum of
    /// price x quantity over all entries. Zero for an empty cart.
    ///
    /// Entries whose product is missing from the catalog contribute
    /// nothing, consistent with the no-op handling of absent products.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Money<'static, Currency> {
        let minor = self
            .entries
            .iter()
            .filter_map(|entry| {
                catalog
                    .get(entry.key)
                    .map(|product| product.price.to_minor_units() * i64::from(entry.quantity))
            })
            .sum();

        Money::from_minor(minor, catalog.currency())
    }
}
