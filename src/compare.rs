//! Compare
//!
//! The comparison screen holds two slots. The first slot anchors the
//! comparison; the second is category-locked to the first, so the two
//! products are always comparable like for like.

use crate::{catalog::Catalog, products::ProductKey};

/// One of the two comparison positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    /// The anchor product.
    First,

    /// The opponent, restricted to the anchor's category.
    Second,
}

/// The two comparison slots, each holding at most one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareSlots {
    first: Option<ProductKey>,
    second: Option<ProductKey>,
}

impl CompareSlots {
    /// Two empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a comparison from a product detail view: the viewed product
    /// anchors the first slot and the first other catalog entry of the
    /// same category fills the second. Returns `None` when no competitor
    /// exists, in which case the caller surfaces a notice and keeps the
    /// current screen.
    #[must_use]
    pub fn seed(catalog: &Catalog, key: ProductKey) -> Option<Self> {
        catalog.find_competitor(key).map(|competitor| CompareSlots {
            first: Some(key),
            second: Some(competitor),
        })
    }

    /// The anchor product, if selected.
    #[must_use]
    pub fn first(&self) -> Option<ProductKey> {
        self.first
    }

    /// The opponent product, if selected.
    #[must_use]
    pub fn second(&self) -> Option<ProductKey> {
        self.second
    }

    /// Whether both slots are filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// Put a product in a slot.
    ///
    /// Selecting the first slot clears the second, so the opponent can
    /// never belong to a stale category. Selecting the second slot while
    /// the first is empty fills the first instead, mirroring the picker
    /// redirect in the source UI.
    pub fn select(&mut self, slot: CompareSlot, key: ProductKey) {
        match slot {
            CompareSlot::First => {
                self.first = Some(key);
                self.second = None;
            }
            CompareSlot::Second => {
                if self.first.is_none() {
                    self.first = Some(key);
                } else {
                    self.second = Some(key);
                }
            }
        }
    }

    /// Empty a slot. Clearing the first slot also clears the second,
    /// since the opponent is only meaningful relative to the anchor.
    pub fn clear(&mut self, slot: CompareSlot) {
        match slot {
            CompareSlot::First => {
                self.first = None;
                self.second = None;
            }
            CompareSlot::Second => self.second = None,
        }
    }

    /// Candidate products for filling a slot: the full catalog for the
    /// first slot; products of the anchor's category (excluding the anchor
    /// itself) for the second. An empty second-slot candidate list is a
    /// valid terminal state, not an error.
    #[must_use]
    pub fn candidates(&self, slot: CompareSlot, catalog: &Catalog) -> Vec<ProductKey> {
        match slot {
            CompareSlot::First => catalog.iter().map(|(key, _)| key).collect(),
            CompareSlot::Second => match self.first.and_then(|key| catalog.get(key)) {
                Some(anchor) => catalog
                    .iter()
                    .filter(|&(key, product)| {
                        Some(key) != self.first && product.category == anchor.category
                    })
                    .map(|(key, _)| key)
                    .collect(),
                None => Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
products:
  - id: gpu-1
    title: GeForce RTX 4090
    brand: NVIDIA
    description: d
    price: "1599 USD"
    image: i
    category: GPU
    rating: 4.9
    reviews: 1
  - id: gpu-2
    title: Radeon RX 7900 XTX
    brand: AMD
    description: d
    price: "999 USD"
    image: i
    category: GPU
    rating: 4.7
    reviews: 1
  - id: nb-1
    title: MacBook Pro 16
    brand: Apple
    description: d
    price: "3499 USD"
    image: i
    category: Notebook
    rating: 4.9
    reviews: 1
"#;

    #[test]
    fn selecting_first_slot_clears_second() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let gpu_1 = catalog.key_of("gpu-1").ok_or("missing gpu-1")?;
        let gpu_2 = catalog.key_of("gpu-2").ok_or("missing gpu-2")?;
        let nb_1 = catalog.key_of("nb-1").ok_or("missing nb-1")?;

        let mut slots = CompareSlots::new();
        slots.select(CompareSlot::First, gpu_1);
        slots.select(CompareSlot::Second, gpu_2);
        slots.select(CompareSlot::First, nb_1);

        assert_eq!(slots.first(), Some(nb_1));
        assert_eq!(slots.second(), None);

        Ok(())
    }

    #[test]
    fn selecting_second_without_first_fills_first() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let gpu_1 = catalog.key_of("gpu-1").ok_or("missing gpu-1")?;

        let mut slots = CompareSlots::new();
        slots.select(CompareSlot::Second, gpu_1);

        assert_eq!(slots.first(), Some(gpu_1));
        assert_eq!(slots.second(), None);

        Ok(())
    }

    #[test]
    fn second_slot_candidates_are_category_locked() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let gpu_1 = catalog.key_of("gpu-1").ok_or("missing gpu-1")?;

        let mut slots = CompareSlots::new();
        slots.select(CompareSlot::First, gpu_1);

        let candidates = slots.candidates(CompareSlot::Second, &catalog);

        assert_eq!(candidates, [catalog.key_of("gpu-2").ok_or("missing gpu-2")?]);

        Ok(())
    }

    #[test]
    fn second_slot_candidates_can_be_empty() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let nb_1 = catalog.key_of("nb-1").ok_or("missing nb-1")?;

        let mut slots = CompareSlots::new();
        slots.select(CompareSlot::First, nb_1);

        assert!(slots.candidates(CompareSlot::Second, &catalog).is_empty());

        Ok(())
    }

    #[test]
    fn seed_installs_anchor_and_first_competitor() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let gpu_2 = catalog.key_of("gpu-2").ok_or("missing gpu-2")?;

        let slots = CompareSlots::seed(&catalog, gpu_2).ok_or("expected seeded slots")?;

        assert_eq!(slots.first(), Some(gpu_2));
        assert_eq!(slots.second(), catalog.key_of("gpu-1"));

        Ok(())
    }

    #[test]
    fn seed_fails_without_competitor() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let nb_1 = catalog.key_of("nb-1").ok_or("missing nb-1")?;

        assert_eq!(CompareSlots::seed(&catalog, nb_1), None);

        Ok(())
    }

    #[test]
    fn clearing_first_slot_clears_both() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let gpu_1 = catalog.key_of("gpu-1").ok_or("missing gpu-1")?;
        let gpu_2 = catalog.key_of("gpu-2").ok_or("missing gpu-2")?;

        let mut slots = CompareSlots::new();
        slots.select(CompareSlot::First, gpu_1);
        slots.select(CompareSlot::Second, gpu_2);
        slots.clear(CompareSlot::First);

        assert_eq!(slots, CompareSlots::new());

        Ok(())
    }
}
