//! Products

use std::fmt;

use rusty_money::{
    Money,
    iso::{Currency, USD},
};
use serde::Deserialize;
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product category.
///
/// The catalog is a closed set; matching on `Category` is exhaustive so an
/// unrecognized category cannot reach the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    /// Graphics cards.
    #[serde(rename = "GPU")]
    Gpu,

    /// Laptops.
    Notebook,

    /// Peripherals, storage and monitors.
    Accessory,
}

impl Category {
    /// All categories, in the order the store filter chips show them.
    pub const ALL: [Category; 3] = [Category::Gpu, Category::Notebook, Category::Accessory];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Gpu => write!(f, "GPU"),
            Category::Notebook => write!(f, "Notebook"),
            Category::Accessory => write!(f, "Accessory"),
        }
    }
}

/// A catalog product.
///
/// Products are immutable once loaded; they are never created or destroyed
/// at runtime.
#[derive(Debug, Clone)]
pub struct Product {
    /// Stable unique identifier (e.g. "gpu-1").
    pub id: String,

    /// Display title.
    pub title: String,

    /// Brand name.
    pub brand: String,

    /// Marketing description.
    pub description: String,

    /// Shelf price.
    pub price: Money<'static, Currency>,

    /// Pre-discount price, when the product is on offer. Always >= `price`.
    pub original_price: Option<Money<'static, Currency>>,

    /// Image URL.
    pub image: String,

    /// Product category.
    pub category: Category,

    /// Average review rating, 0.0..=5.0.
    pub rating: f64,

    /// Number of reviews.
    pub reviews: u32,

    /// Optional badge label (e.g. "Flagship", "Best Seller").
    pub badge: Option<String>,
}

impl Product {
    /// Savings versus the original listed price, when the product is discounted.
    #[must_use]
    pub fn savings(&self) -> Option<Money<'static, Currency>> {
        self.original_price.map(|original| {
            let minor = original.to_minor_units() - self.price.to_minor_units();
            Money::from_minor(minor, self.currency())
        })
    }

    /// Currency of the product's price.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        // Catalog products are only built from ISO currency constants.
        self.price.currency()
    }
}

/// Fallback currency for empty catalogs and empty carts.
pub const DEFAULT_CURRENCY: &Currency = USD;
