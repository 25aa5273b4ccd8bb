//! Catalog Fixtures
//!
//! The catalog is loaded from YAML, with prices written as
//! `"AMOUNT CURRENCY"` strings (e.g. `"1599 USD"`).

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::products::{Category, Product};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Rating outside the 0..=5 scale
    #[error("Product {id} has rating {rating} outside 0..=5")]
    RatingOutOfRange {
        /// Offending product id
        id: String,
        /// Rating found in the fixture
        rating: f64,
    },

    /// Original price below the shelf price
    #[error("Product {0} has an original price below its shelf price")]
    OriginalPriceBelowPrice(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Stable unique id
    pub id: String,

    /// Display title
    pub title: String,

    /// Brand name
    pub brand: String,

    /// Marketing description
    pub description: String,

    /// Shelf price (e.g. "1599 USD")
    pub price: String,

    /// Pre-discount price, when on offer
    pub original_price: Option<String>,

    /// Image URL
    pub image: String,

    /// Product category
    pub category: Category,

    /// Average review rating
    pub rating: f64,

    /// Number of reviews
    pub reviews: u32,

    /// Optional badge label
    pub badge: Option<String>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        if !(0.0..=5.0).contains(&fixture.rating) {
            return Err(FixtureError::RatingOutOfRange {
                id: fixture.id,
                rating: fixture.rating,
            });
        }

        let (price_minor, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(price_minor, currency);

        let original_price = fixture
            .original_price
            .as_deref()
            .map(parse_price)
            .transpose()?
            .map(|(minor, original_currency)| -> Result<_, FixtureError> {
                if original_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        original_currency.iso_alpha_code.to_string(),
                    ));
                }

                if minor < price_minor {
                    return Err(FixtureError::OriginalPriceBelowPrice(fixture.id.clone()));
                }

                Ok(Money::from_minor(minor, original_currency))
            })
            .transpose()?;

        Ok(Product {
            id: fixture.id,
            title: fixture.title,
            brand: fixture.brand,
            description: fixture.description,
            price,
            original_price,
            image: fixture.image,
            category: fixture.category,
            rating: fixture.rating,
            reviews: fixture.reviews,
            badge: fixture.badge,
        })
    }
}

/// Parse price string (e.g. "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// The bundled demo catalog YAML (the 15-product sample data set).
pub const DEMO_CATALOG_YAML: &str = include_str!("../fixtures/catalog.yml");
