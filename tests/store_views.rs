//! Integration tests for the catalog views and screen rendering over the
//! demo catalog.
//!
//! The demo catalog carries fifteen products: five GPUs, five notebooks and
//! five accessories, six of which are rated 4.8 or above.

use testresult::TestResult;

use vitrine::{
    app::{Command, Storefront},
    catalog::{Catalog, CategoryFilter, StoreFilter},
    navigation::Screen,
    products::Category,
    screens::write_screen,
};

#[test]
fn search_matches_title_and_brand_case_insensitively() -> TestResult {
    let catalog = Catalog::demo()?;

    let hits = catalog.search(&StoreFilter {
        category: CategoryFilter::All,
        query: "rtx".to_string(),
    });

    let ids: Vec<&str> = hits
        .iter()
        .filter_map(|&key| catalog.get(key).map(|product| product.id.as_str()))
        .collect();

    assert_eq!(ids, vec!["gpu-1", "gpu-2", "gpu-4"]);

    // Brand matches too, regardless of case.
    let hits = catalog.search(&StoreFilter {
        category: CategoryFilter::All,
        query: "nvidia".to_string(),
    });

    assert_eq!(hits.len(), 1);

    Ok(())
}

#[test]
fn category_chip_narrows_search_results() -> TestResult {
    let catalog = Catalog::demo()?;

    let hits = catalog.search(&StoreFilter {
        category: CategoryFilter::Only(Category::Notebook),
        query: String::new(),
    });

    assert_eq!(hits.len(), 5);

    for key in hits {
        let product = catalog.get(key).ok_or("hit missing from catalog")?;
        assert_eq!(product.category, Category::Notebook);
    }

    Ok(())
}

#[test]
fn best_sellers_row_is_capped_and_high_rated() -> TestResult {
    let catalog = Catalog::demo()?;

    let row = catalog.best_sellers();

    assert_eq!(row.len(), 6);

    for &key in &row {
        let product = catalog.get(key).ok_or("best seller missing")?;
        assert!(product.rating >= 4.8);
    }

    // Catalog order, so the flagship GPU leads the row.
    let first = row.first().and_then(|&key| catalog.get(key));
    assert_eq!(first.map(|product| product.id.as_str()), Some("gpu-1"));

    Ok(())
}

#[test]
fn category_rows_preserve_catalog_order() -> TestResult {
    let catalog = Catalog::demo()?;

    let ids: Vec<&str> = catalog
        .category_slice(Category::Accessory)
        .iter()
        .filter_map(|&key| catalog.get(key).map(|product| product.id.as_str()))
        .collect();

    assert_eq!(ids, vec!["acc-1", "acc-2", "acc-3", "acc-4", "acc-5"]);

    Ok(())
}

#[test]
fn submitted_search_drives_the_store_screen() -> TestResult {
    let mut storefront = Storefront::new(Catalog::demo()?);

    storefront.apply(Command::SubmitSearch("zephyrus".to_string()));

    assert_eq!(storefront.screen(), Screen::Store);

    let mut out = Vec::new();
    write_screen(&mut out, &storefront)?;
    let output = String::from_utf8(out)?;

    assert!(output.contains("ROG Zephyrus G14"));
    assert!(!output.contains("MacBook"));

    Ok(())
}

#[test]
fn every_screen_renders_for_a_fresh_session() -> TestResult {
    let mut storefront = Storefront::new(Catalog::demo()?);
    storefront.apply(Command::SubmitLogin);

    for screen in [
        Screen::Home,
        Screen::Store,
        Screen::Detail,
        Screen::Cart,
        Screen::Checkout,
        Screen::Compare,
        Screen::Wishlist,
        Screen::Profile,
    ] {
        storefront.apply(Command::Navigate(screen));

        let mut out = Vec::new();
        write_screen(&mut out, &storefront)?;

        assert!(!out.is_empty(), "screen {screen} rendered nothing");
    }

    Ok(())
}
