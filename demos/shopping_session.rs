//! Shopping Session Example
//!
//! Walks a scripted session through the storefront: browse the home screen,
//! search the store, inspect a product, compare it against a competitor, then
//! check out behind the login guard.
//!
//! Use `-c` to load a catalog fixture from a YAML file
//! Use `-q` to change the search query submitted from the home screen

use std::{fs, io};

use anyhow::Result;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrine::{
    app::{Command, Storefront},
    catalog::Catalog,
    compare::CompareSlot,
    navigation::Screen,
    screens::write_screen,
    utils::SessionArgs,
};

/// Shopping Session Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = SessionArgs::parse();

    let catalog = match args.catalog.as_deref() {
        Some(path) => Catalog::from_yaml(&fs::read_to_string(path)?)?,
        None => Catalog::demo()?,
    };

    let mut storefront = Storefront::new(catalog);

    render(&storefront)?;

    // Search from the home screen lands on the store with the query applied.
    step(&mut storefront, Command::SubmitSearch(args.query.clone()))?;

    let Some(&hit) = storefront
        .catalog()
        .search(&storefront.store_filter())
        .first()
    else {
        println!("No products matched \"{}\"", args.query);
        return Ok(());
    };

    step(&mut storefront, Command::SelectProduct(hit))?;
    step(&mut storefront, Command::AddToCart(hit))?;
    step(&mut storefront, Command::ToggleWishlist(hit))?;

    // Compare against a competitor in the same category, then swap the
    // second slot for another candidate if one exists.
    step(&mut storefront, Command::RequestCompare)?;

    if let Some(&candidate) = storefront
        .compare()
        .candidates(CompareSlot::Second, storefront.catalog())
        .last()
    {
        step(
            &mut storefront,
            Command::SelectCompareSlot(CompareSlot::Second, candidate),
        )?;
    }

    step(&mut storefront, Command::Back)?;

    // Checkout is guarded: the first attempt parks us behind the login
    // prompt, and logging in resumes the deferred navigation.
    step(&mut storefront, Command::Navigate(Screen::Cart))?;
    step(&mut storefront, Command::RequestCheckout)?;
    step(&mut storefront, Command::SubmitLogin)?;

    step(&mut storefront, Command::PlaceOrder)?;

    Ok(())
}

fn step(storefront: &mut Storefront, command: Command) -> Result<()> {
    storefront.apply(command);

    if let Some(notice) = storefront.take_notice() {
        println!("\n>> {notice}");
    }

    render(storefront)
}

fn render(storefront: &Storefront) -> Result<()> {
    write_screen(io::stdout().lock(), storefront)?;

    Ok(())
}
