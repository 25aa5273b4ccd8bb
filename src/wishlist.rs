//! Wishlist

use crate::products::ProductKey;

/// Membership set of wishlisted products, at most one entry per product,
/// shown in the order products were first added.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    keys: Vec<ProductKey>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership: absent becomes present, present becomes absent.
    /// Returns whether the product is a member after the toggle.
    pub fn toggle(&mut self, key: ProductKey) -> bool {
        if self.contains(key) {
            self.keys.retain(|&member| member != key);
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Whether the product is wishlisted.
    #[must_use]
    pub fn contains(&self, key: ProductKey) -> bool {
        self.keys.contains(&key)
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ProductKey> + '_ {
        self.keys.iter().copied()
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
