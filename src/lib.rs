//! Vitrine
//!
//! Vitrine is the client-side state core of a mobile storefront for PC hardware: a product
//! catalog, a quantity-tracking cart, a wishlist, screen navigation with an auth guard, and
//! a two-slot product comparison, driven by a single command dispatcher.

pub mod app;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod compare;
pub mod fixtures;
pub mod navigation;
pub mod prelude;
pub mod products;
pub mod promo;
pub mod screens;
pub mod utils;
pub mod wishlist;
