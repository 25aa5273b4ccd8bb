//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    app::{Command, Notice, Storefront},
    auth::{AuthSession, RegistrationForm},
    cart::{Cart, CartEntry},
    catalog::{Catalog, CategoryFilter, StoreFilter},
    compare::{CompareSlot, CompareSlots},
    fixtures::{CatalogFixture, FixtureError, ProductFixture},
    navigation::{Navigator, Screen},
    products::{Category, Product, ProductKey},
    promo::{DealCountdown, HeroCarousel},
    screens::{ScreenError, write_screen},
    wishlist::Wishlist,
};
