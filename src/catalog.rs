//! Catalog
//!
//! The static, immutable set of purchasable products, plus the pure derived
//! views the home and store screens are built from. Views are recomputed on
//! demand; the catalog never changes for the lifetime of the process, so
//! nothing is cached.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::{
    fixtures::{CatalogFixture, FixtureError},
    products::{Category, DEFAULT_CURRENCY, Product, ProductKey},
};

/// Maximum number of products shown per home-screen row.
pub const HOME_ROW_LIMIT: usize = 6;

/// Minimum rating for the "Best Sellers" row.
pub const BEST_SELLER_RATING: f64 = 4.8;

/// Category restriction for the store screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "All" chip: no category restriction.
    #[default]
    All,

    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

/// Store search/browse filter: a category chip plus a free-text query.
///
/// The query matches case-insensitively against title or brand; an empty
/// query matches everything.
#[derive(Debug, Clone, Default)]
pub struct StoreFilter {
    /// Active category chip.
    pub category: CategoryFilter,

    /// Free-text search query.
    pub query: String,
}

impl StoreFilter {
    fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        let query = self.query.to_lowercase();

        product.title.to_lowercase().contains(&query)
            || product.brand.to_lowercase().contains(&query)
    }
}

/// The product catalog, in fixture order.
#[derive(Debug, Default)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    by_id: FxHashMap<String, ProductKey>,
    currency: Option<&'static Currency>,
}

impl Catalog {
    /// Load a catalog from YAML fixture text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML cannot be parsed, a product
    /// record is invalid, two products share an id, or the products do not
    /// all share one currency.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let mut catalog = Catalog::default();

        for product_fixture in fixture.products {
            let product = Product::try_from(product_fixture)?;

            if catalog.by_id.contains_key(&product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            match catalog.currency {
                None => catalog.currency = Some(product.currency()),
                Some(currency) if currency == product.currency() => {}
                Some(currency) => {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        product.currency().iso_alpha_code.to_string(),
                    ));
                }
            }

            let id = product.id.clone();
            let key = catalog.products.insert(product);
            catalog.order.push(key);
            catalog.by_id.insert(id, key);
        }

        tracing::debug!(products = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Load the bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_yaml(crate::fixtures::DEMO_CATALOG_YAML)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency shared by every product in the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency.unwrap_or(DEFAULT_CURRENCY)
    }

    /// Look up a product by key.
    #[must_use]
    pub fn get(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Whether the catalog contains the key.
    #[must_use]
    pub fn contains(&self, key: ProductKey) -> bool {
        self.products.contains_key(key)
    }

    /// Look up a product key by its stable string id.
    #[must_use]
    pub fn key_of(&self, id: &str) -> Option<ProductKey> {
        self.by_id.get(id).copied()
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductKey, &Product)> {
        self.order
            .iter()
            .filter_map(|&key| self.products.get(key).map(|product| (key, product)))
    }

    /// The "Best Sellers" home row: rating >= 4.8, first six in catalog order.
    #[must_use]
    pub fn best_sellers(&self) -> SmallVec<[ProductKey; HOME_ROW_LIMIT]> {
        self.iter()
            .filter(|(_, product)| product.rating >= BEST_SELLER_RATING)
            .map(|(key, _)| key)
            .take(HOME_ROW_LIMIT)
            .collect()
    }

    /// A category home row: first six products of the category in catalog order.
    #[must_use]
    pub fn category_slice(&self, category: Category) -> SmallVec<[ProductKey; HOME_ROW_LIMIT]> {
        self.iter()
            .filter(|(_, product)| product.category == category)
            .map(|(key, _)| key)
            .take(HOME_ROW_LIMIT)
            .collect()
    }

    /// Store search: category chip AND case-insensitive substring match on
    /// title or brand, over the full catalog, unbounded.
    #[must_use]
    pub fn search(&self, filter: &StoreFilter) -> Vec<ProductKey> {
        self.iter()
            .filter(|(_, product)| filter.matches(product))
            .map(|(key, _)| key)
            .collect()
    }

    /// First other catalog entry sharing the product's category, in catalog
    /// order. Used to seed the comparison screen from a detail view.
    #[must_use]
    pub fn find_competitor(&self, key: ProductKey) -> Option<ProductKey> {
        let subject = self.products.get(key)?;

        self.iter()
            .find(|&(other_key, other)| other_key != key && other.category == subject.category)
            .map(|(other_key, _)| other_key)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const SMALL_CATALOG: &str = r#"
products:
  - id: gpu-1
    title: GeForce RTX 4090
    brand: NVIDIA
    description: Flagship GPU.
    price: "1599 USD"
    original_price: "1699 USD"
    image: https://example.com/gpu.jpg
    category: GPU
    rating: 4.9
    reviews: 342
    badge: Flagship
  - id: gpu-2
    title: Radeon RX 7900 XTX
    brand: AMD
    description: Advanced graphics.
    price: "999 USD"
    image: https://example.com/gpu.jpg
    category: GPU
    rating: 4.7
    reviews: 89
  - id: acc-1
    title: MX Master 3S
    brand: Logitech
    description: An icon remastered.
    price: "99 USD"
    image: https://example.com/mouse.jpg
    category: Accessory
    rating: 4.9
    reviews: 2341
"#;

    #[test]
    fn from_yaml_preserves_catalog_order() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let ids: Vec<&str> = catalog.iter().map(|(_, p)| p.id.as_str()).collect();

        assert_eq!(ids, ["gpu-1", "gpu-2", "acc-1"]);

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_duplicate_ids() {
        let duplicated = format!(
            "{SMALL_CATALOG}  - id: gpu-1\n    title: Copy\n    brand: X\n    description: d\n    price: \"1 USD\"\n    image: i\n    category: GPU\n    rating: 1.0\n    reviews: 0\n"
        );

        let result = Catalog::from_yaml(&duplicated);

        assert!(matches!(
            result,
            Err(FixtureError::DuplicateProduct(id)) if id == "gpu-1"
        ));
    }

    #[test]
    fn from_yaml_rejects_mixed_currencies() {
        let mixed = format!(
            "{SMALL_CATALOG}  - id: gpu-3\n    title: Import\n    brand: X\n    description: d\n    price: \"1 GBP\"\n    image: i\n    category: GPU\n    rating: 1.0\n    reviews: 0\n"
        );

        let result = Catalog::from_yaml(&mixed);

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn best_sellers_only_include_highly_rated_products() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let best: Vec<&str> = catalog
            .best_sellers()
            .iter()
            .filter_map(|&key| catalog.get(key))
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(best, ["gpu-1", "acc-1"]);

        Ok(())
    }

    #[test]
    fn category_slice_is_ordered_and_category_locked() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let gpus = catalog.category_slice(Category::Gpu);

        assert_eq!(gpus.len(), 2);
        assert!(
            gpus.iter()
                .filter_map(|&key| catalog.get(key))
                .all(|p| p.category == Category::Gpu)
        );

        Ok(())
    }

    #[test]
    fn search_matches_brand_case_insensitively() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let filter = StoreFilter {
            category: CategoryFilter::All,
            query: "logi".to_string(),
        };

        let hits = catalog.search(&filter);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().copied(), catalog.key_of("acc-1"));

        Ok(())
    }

    #[test]
    fn search_intersects_category_and_query() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let filter = StoreFilter {
            category: CategoryFilter::Only(Category::Accessory),
            query: "rtx".to_string(),
        };

        assert!(catalog.search(&filter).is_empty());

        Ok(())
    }

    #[test]
    fn find_competitor_picks_first_same_category_entry() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let gpu_2 = catalog.key_of("gpu-2").ok_or("missing gpu-2")?;

        assert_eq!(catalog.find_competitor(gpu_2), catalog.key_of("gpu-1"));

        Ok(())
    }

    #[test]
    fn find_competitor_is_none_for_lone_category_member() -> TestResult {
        let catalog = Catalog::from_yaml(SMALL_CATALOG)?;

        let accessory = catalog.key_of("acc-1").ok_or("missing acc-1")?;

        assert_eq!(catalog.find_competitor(accessory), None);

        Ok(())
    }

    #[test]
    fn empty_catalog_falls_back_to_default_currency() -> TestResult {
        let catalog = Catalog::from_yaml("products: []")?;

        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), DEFAULT_CURRENCY);

        Ok(())
    }
}
