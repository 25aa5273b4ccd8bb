//! Screens
//!
//! Terminal renderers for the storefront, one per screen. Views are
//! presentation-only consumers: they read the [`Storefront`] and write
//! tables, never mutating state.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};
use thiserror::Error;

use crate::{
    app::Storefront,
    catalog::Catalog,
    compare::CompareSlot,
    navigation::Screen,
    products::{Category, Product, ProductKey},
};

/// Errors that can occur while rendering a screen.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A referenced product is missing from the catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Render the currently visible screen.
///
/// # Errors
///
/// Returns a [`ScreenError`] if a referenced product is missing or the
/// output cannot be written.
pub fn write_screen(mut out: impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    match storefront.screen() {
        Screen::Home => write_home(&mut out, storefront),
        Screen::Store => write_store(&mut out, storefront),
        Screen::Detail => write_detail(&mut out, storefront),
        Screen::Cart => write_cart(&mut out, storefront),
        Screen::Checkout => write_checkout(&mut out, storefront),
        Screen::Compare => write_compare(&mut out, storefront),
        Screen::Wishlist => write_wishlist(&mut out, storefront),
        Screen::Profile => write_profile(&mut out, storefront),
    }
}

fn write_home(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    let catalog = storefront.catalog();

    let sections: [(&str, Vec<ProductKey>); 3] = [
        ("Best Sellers", storefront.catalog().best_sellers().to_vec()),
        (
            "Notebooks",
            catalog.category_slice(Category::Notebook).to_vec(),
        ),
        ("GPU Series", catalog.category_slice(Category::Gpu).to_vec()),
    ];

    for (heading, keys) in sections {
        writeln!(out, "\n{heading}").map_err(|_err| ScreenError::IO)?;

        let table = product_table(catalog, &keys)?;
        writeln!(out, "{table}").map_err(|_err| ScreenError::IO)?;
    }

    Ok(())
}

fn write_store(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    let filter = storefront.store_filter();
    let hits = storefront.catalog().search(&filter);

    writeln!(out, "\nStore").map_err(|_err| ScreenError::IO)?;

    if hits.is_empty() {
        writeln!(
            out,
            "We couldn't find any items matching \"{}\"",
            filter.query
        )
        .map_err(|_err| ScreenError::IO)?;

        return Ok(());
    }

    let table = product_table(storefront.catalog(), &hits)?;
    writeln!(out, "{table}").map_err(|_err| ScreenError::IO)
}

fn write_detail(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    let Some(product) = storefront.selected_product() else {
        return writeln!(out, "\nNo product selected.").map_err(|_err| ScreenError::IO);
    };

    writeln!(out, "\n{} — {}", product.title, product.brand).map_err(|_err| ScreenError::IO)?;

    if let Some(badge) = &product.badge {
        writeln!(out, "[{badge}]").map_err(|_err| ScreenError::IO)?;
    }

    match (product.original_price, product.savings()) {
        (Some(original), Some(savings)) => writeln!(
            out,
            "{}  (was {original}, save {savings})",
            product.price
        )
        .map_err(|_err| ScreenError::IO)?,
        _ => writeln!(out, "{}", product.price).map_err(|_err| ScreenError::IO)?,
    }

    writeln!(
        out,
        "{} | {:.1} stars ({} reviews)",
        product.category, product.rating, product.reviews
    )
    .map_err(|_err| ScreenError::IO)?;

    writeln!(out, "{}", product.description).map_err(|_err| ScreenError::IO)?;

    if let Some(key) = storefront.selected() {
        if storefront.wishlist().contains(key) {
            writeln!(out, "♥ In wishlist").map_err(|_err| ScreenError::IO)?;
        }

        if let Some(quantity) = storefront.cart().quantity_of(key) {
            writeln!(out, "In cart: {quantity}").map_err(|_err| ScreenError::IO)?;
        }
    }

    Ok(())
}

fn write_cart(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    let catalog = storefront.catalog();
    let cart = storefront.cart();

    writeln!(out, "\nCart").map_err(|_err| ScreenError::IO)?;

    if cart.is_empty() {
        return writeln!(out, "Your cart is empty.").map_err(|_err| ScreenError::IO);
    }

    let mut builder = Builder::default();
    builder.push_record(["Item", "Qty", "Unit Price", "Line Total"]);

    for entry in cart.iter() {
        let product = catalog
            .get(entry.key())
            .ok_or(ScreenError::MissingProduct(entry.key()))?;

        builder.push_record([
            product.title.clone(),
            entry.quantity().to_string(),
            product.price.to_string(),
            line_total(product, entry.quantity()).to_string(),
        ]);
    }

    let table = style_table(builder, 2..4);
    writeln!(out, "{table}").map_err(|_err| ScreenError::IO)?;

    writeln!(out, "Items: {}", cart.item_count()).map_err(|_err| ScreenError::IO)?;
    writeln!(out, "Total: {}", cart.total(catalog)).map_err(|_err| ScreenError::IO)
}

fn write_checkout(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    writeln!(out, "\nCheckout").map_err(|_err| ScreenError::IO)?;

    writeln!(
        out,
        "{} items — {}",
        storefront.cart().item_count(),
        storefront.cart().total(storefront.catalog())
    )
    .map_err(|_err| ScreenError::IO)?;

    writeln!(out, "Payment and delivery are mocked; placing the order clears the cart.")
        .map_err(|_err| ScreenError::IO)
}

fn write_compare(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    let catalog = storefront.catalog();
    let slots = storefront.compare();

    writeln!(out, "\nCompare").map_err(|_err| ScreenError::IO)?;

    let (Some(first_key), Some(second_key)) = (slots.first(), slots.second()) else {
        if slots.first().is_some()
            && slots.candidates(CompareSlot::Second, catalog).is_empty()
        {
            writeln!(out, "No compatible products found in this category.")
                .map_err(|_err| ScreenError::IO)?;
        }

        return writeln!(out, "Fill both slots to view detailed comparison")
            .map_err(|_err| ScreenError::IO);
    };

    let first = catalog
        .get(first_key)
        .ok_or(ScreenError::MissingProduct(first_key))?;
    let second = catalog
        .get(second_key)
        .ok_or(ScreenError::MissingProduct(second_key))?;

    let mut builder = Builder::default();
    builder.push_record(["", first.title.as_str(), second.title.as_str()]);
    builder.push_record(["Brand", first.brand.as_str(), second.brand.as_str()]);
    builder.push_record([
        "Category".to_string(),
        first.category.to_string(),
        second.category.to_string(),
    ]);
    builder.push_record([
        "Rating".to_string(),
        format!("{:.1} ({})", first.rating, first.reviews),
        format!("{:.1} ({})", second.rating, second.reviews),
    ]);
    builder.push_record([
        "Price".to_string(),
        first.price.to_string(),
        second.price.to_string(),
    ]);
    builder.push_record([
        "Savings".to_string(),
        savings_cell(first),
        savings_cell(second),
    ]);

    let table = style_table(builder, 1..3);
    writeln!(out, "{table}").map_err(|_err| ScreenError::IO)
}

fn write_wishlist(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    writeln!(out, "\nWishlist").map_err(|_err| ScreenError::IO)?;

    if storefront.wishlist().is_empty() {
        return writeln!(out, "Your wishlist is empty.").map_err(|_err| ScreenError::IO);
    }

    let keys: Vec<ProductKey> = storefront.wishlist().iter().collect();
    let table = product_table(storefront.catalog(), &keys)?;

    writeln!(out, "{table}").map_err(|_err| ScreenError::IO)
}

fn write_profile(out: &mut impl io::Write, storefront: &Storefront) -> Result<(), ScreenError> {
    writeln!(out, "\nProfile").map_err(|_err| ScreenError::IO)?;

    let status = if storefront.auth().is_logged_in() {
        "Signed in"
    } else {
        "Signed out"
    };

    writeln!(out, "{status}").map_err(|_err| ScreenError::IO)?;

    for entry in ["Orders", "Addresses", "Settings", "Log out"] {
        writeln!(out, "  {entry}").map_err(|_err| ScreenError::IO)?;
    }

    Ok(())
}

/// Product listing table shared by the home, store and wishlist screens.
fn product_table(catalog: &Catalog, keys: &[ProductKey]) -> Result<Table, ScreenError> {
    let mut builder = Builder::default();
    builder.push_record(["Title", "Brand", "Category", "Price", "Rating", "Badge"]);

    for &key in keys {
        let product = catalog.get(key).ok_or(ScreenError::MissingProduct(key))?;

        builder.push_record([
            product.title.clone(),
            product.brand.clone(),
            product.category.to_string(),
            product.price.to_string(),
            format!("{:.1} ({})", product.rating, product.reviews),
            product.badge.clone().unwrap_or_default(),
        ]);
    }

    Ok(style_table(builder, 3..4))
}

fn style_table(builder: Builder, money_columns: std::ops::Range<usize>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(money_columns), Alignment::right());

    table
}

fn line_total(product: &Product, quantity: u32) -> Money<'static, Currency> {
    Money::from_minor(
        product.price.to_minor_units() * i64::from(quantity),
        product.currency(),
    )
}

fn savings_cell(product: &Product) -> String {
    product
        .savings()
        .map_or_else(|| "-".to_string(), |savings| savings.to_string())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        app::{Command, Storefront},
        catalog::Catalog,
    };

    use super::*;

    const CATALOG: &str = r#"
products:
  - id: gpu-1
    title: GeForce RTX 4090
    brand: NVIDIA
    description: Flagship GPU.
    price: "1599 USD"
    original_price: "1699 USD"
    image: i
    category: GPU
    rating: 4.9
    reviews: 342
    badge: Flagship
  - id: gpu-2
    title: Radeon RX 7900 XTX
    brand: AMD
    description: Advanced graphics.
    price: "999 USD"
    image: i
    category: GPU
    rating: 4.7
    reviews: 89
"#;

    fn rendered(storefront: &Storefront) -> Result<String, ScreenError> {
        let mut out = Vec::new();
        write_screen(&mut out, storefront)?;

        String::from_utf8(out).map_err(|_err| ScreenError::IO)
    }

    #[test]
    fn home_renders_section_headings_and_products() -> TestResult {
        let storefront = Storefront::new(Catalog::from_yaml(CATALOG)?);

        let output = rendered(&storefront)?;

        assert!(output.contains("Best Sellers"));
        assert!(output.contains("GPU Series"));
        assert!(output.contains("GeForce RTX 4090"));
        assert!(output.contains("Flagship"));

        Ok(())
    }

    #[test]
    fn store_renders_no_match_message() -> TestResult {
        let mut storefront = Storefront::new(Catalog::from_yaml(CATALOG)?);
        storefront.apply(Command::SubmitSearch("macbook".to_string()));

        let output = rendered(&storefront)?;

        assert!(output.contains("We couldn't find any items matching \"macbook\""));

        Ok(())
    }

    #[test]
    fn cart_renders_line_totals_and_summary() -> TestResult {
        let mut storefront = Storefront::new(Catalog::from_yaml(CATALOG)?);
        let gpu_1 = storefront.catalog().key_of("gpu-1").ok_or("missing gpu-1")?;

        storefront.apply(Command::AddToCart(gpu_1));
        storefront.apply(Command::AddToCart(gpu_1));
        storefront.apply(Command::Navigate(Screen::Cart));

        let output = rendered(&storefront)?;

        assert!(output.contains("GeForce RTX 4090"));
        assert!(output.contains("Items: 2"));
        assert!(output.contains("$3,198.00"));

        Ok(())
    }

    #[test]
    fn compare_renders_both_columns() -> TestResult {
        let mut storefront = Storefront::new(Catalog::from_yaml(CATALOG)?);
        let gpu_1 = storefront.catalog().key_of("gpu-1").ok_or("missing gpu-1")?;

        storefront.apply(Command::SelectProduct(gpu_1));
        storefront.apply(Command::RequestCompare);

        let output = rendered(&storefront)?;

        assert!(output.contains("GeForce RTX 4090"));
        assert!(output.contains("Radeon RX 7900 XTX"));
        assert!(output.contains("Savings"));

        Ok(())
    }

    #[test]
    fn empty_compare_prompts_for_slots() -> TestResult {
        let mut storefront = Storefront::new(Catalog::from_yaml(CATALOG)?);
        storefront.apply(Command::Navigate(Screen::Compare));

        let output = rendered(&storefront)?;

        assert!(output.contains("Fill both slots to view detailed comparison"));

        Ok(())
    }
}
