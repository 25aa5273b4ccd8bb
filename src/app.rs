//! Storefront
//!
//! The root controller. All application state lives here and every
//! mutation flows through [`Storefront::apply`]: views emit [`Command`]
//! intents instead of mutating state directly, and the dispatch matches
//! exhaustively so no screen or intent can go unhandled.
//!
//! The surface is deliberately permissive: commands referring to absent
//! products are silent no-ops, and validation failures surface as
//! user-visible [`Notice`]s rather than errors.

use std::fmt;

use crate::{
    auth::{AuthSession, RegistrationForm},
    cart::Cart,
    catalog::{Catalog, CategoryFilter, StoreFilter},
    compare::{CompareSlot, CompareSlots},
    navigation::{Navigator, Screen},
    products::{Product, ProductKey},
    wishlist::Wishlist,
};

/// An intent emitted by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch to a screen (bottom navigation, side menu, header links).
    Navigate(Screen),

    /// Return to the previously occupied screen.
    Back,

    /// Open a product's detail view.
    SelectProduct(ProductKey),

    /// Open the detail view of a product from its cart line.
    OpenCartItem(ProductKey),

    /// Add one unit of a product to the cart.
    AddToCart(ProductKey),

    /// Set the quantity of a cart entry; zero or less removes it.
    UpdateQuantity(ProductKey, i64),

    /// Remove a cart entry.
    RemoveFromCart(ProductKey),

    /// Flip a product's wishlist membership.
    ToggleWishlist(ProductKey),

    /// Submit a search query from the header; a non-empty query opens the
    /// store screen.
    SubmitSearch(String),

    /// Pick a category chip on the store screen.
    SetStoreCategory(CategoryFilter),

    /// Compare the product currently shown in the detail view against the
    /// first same-category competitor.
    RequestCompare,

    /// Put a product in a comparison slot.
    SelectCompareSlot(CompareSlot, ProductKey),

    /// Empty a comparison slot.
    ClearCompareSlot(CompareSlot),

    /// Proceed from the cart to checkout; requires a logged-in session.
    RequestCheckout,

    /// Confirm the order: clears the cart and returns home.
    PlaceOrder,

    /// Complete the mock login prompt.
    SubmitLogin,

    /// Submit the mock registration form.
    SubmitRegistration(RegistrationForm),

    /// Close the login prompt without logging in.
    DismissLogin,

    /// Log out and return home.
    Logout,
}

/// A user-visible message, standing in for the source UI's blocking
/// dialogs. At most one notice is held at a time; the most recent wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The order went through and the cart was cleared.
    OrderConfirmed,

    /// A product was added to the cart.
    AddedToCart(String),

    /// No same-category product exists to compare against.
    NoComparableProduct,

    /// The registration form has empty fields.
    MissingFields,

    /// The mock registration succeeded.
    AccountCreated(String),

    /// The session was logged out.
    LoggedOut,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::OrderConfirmed => write!(
                f,
                "Order Confirmed. Thank you for your purchase! Your order is being processed."
            ),
            Notice::AddedToCart(title) => write!(f, "Added {title} to cart"),
            Notice::NoComparableProduct => write!(f, "No similar products found to compare"),
            Notice::MissingFields => write!(f, "Please fill in all fields"),
            Notice::AccountCreated(name) => write!(
                f,
                "Account Created. Welcome {name}! Your account has been successfully registered."
            ),
            Notice::LoggedOut => write!(f, "You have been logged out."),
        }
    }
}

/// The storefront: catalog plus all mutable application state.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    navigator: Navigator,
    auth: AuthSession,
    compare: CompareSlots,
    selected: Option<ProductKey>,
    search_query: String,
    store_category: CategoryFilter,
    notice: Option<Notice>,
}

impl Storefront {
    /// Create a storefront over a catalog, on the home screen, logged out,
    /// with empty cart and wishlist.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Storefront {
            catalog,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            navigator: Navigator::new(),
            auth: AuthSession::new(),
            compare: CompareSlots::new(),
            selected: None,
            search_query: String::new(),
            store_category: CategoryFilter::All,
            notice: None,
        }
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart ledger.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist.
    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Current and previous screen.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The screen currently shown.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// The mock session.
    #[must_use]
    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    /// The comparison slots.
    #[must_use]
    pub fn compare(&self) -> &CompareSlots {
        &self.compare
    }

    /// The product shown on the detail screen, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ProductKey> {
        self.selected
    }

    /// The selected product's record, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|key| self.catalog.get(key))
    }

    /// The store filter assembled from the active chip and search query.
    #[must_use]
    pub fn store_filter(&self) -> StoreFilter {
        StoreFilter {
            category: self.store_category,
            query: self.search_query.clone(),
        }
    }

    /// The current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The most recent notice, if it has not been taken yet.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the most recent notice, clearing it.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Apply a view intent to the state.
    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, screen = %self.screen(), "applying command");

        match command {
            Command::Navigate(target) => self.navigate(target),
            Command::Back => self.back(),
            Command::SelectProduct(key) => self.select_product(key),
            Command::OpenCartItem(key) => {
                if self.cart.quantity_of(key).is_some() {
                    self.select_product(key);
                }
            }
            Command::AddToCart(key) => {
                if let Some(product) = self.catalog.get(key) {
                    self.notice = Some(Notice::AddedToCart(product.title.clone()));
                    self.cart.add(key);
                }
            }
            Command::UpdateQuantity(key, quantity) => self.cart.update_quantity(key, quantity),
            Command::RemoveFromCart(key) => self.cart.remove(key),
            Command::ToggleWishlist(key) => {
                if self.catalog.contains(key) {
                    self.wishlist.toggle(key);
                }
            }
            Command::SubmitSearch(query) => {
                let open_store = !query.trim().is_empty();
                self.search_query = query;

                if open_store {
                    self.navigate(Screen::Store);
                }
            }
            Command::SetStoreCategory(filter) => self.store_category = filter,
            Command::RequestCompare => self.request_compare(),
            Command::SelectCompareSlot(slot, key) => {
                if self.catalog.contains(key) {
                    self.compare.select(slot, key);
                }
            }
            Command::ClearCompareSlot(slot) => self.compare.clear(slot),
            Command::RequestCheckout => self.guard(Screen::Checkout),
            Command::PlaceOrder => self.place_order(),
            Command::SubmitLogin => self.resolve_login(),
            Command::SubmitRegistration(form) => {
                if form.is_complete() {
                    self.notice = Some(Notice::AccountCreated(form.name));
                    self.resolve_login();
                } else {
                    self.notice = Some(Notice::MissingFields);
                }
            }
            Command::DismissLogin => self.auth.dismiss(),
            Command::Logout => {
                self.auth.logout();
                self.notice = Some(Notice::LoggedOut);
                self.navigate(Screen::Home);
            }
        }
    }

    fn select_product(&mut self, key: ProductKey) {
        if self.catalog.contains(key) {
            self.selected = Some(key);
            self.navigate(Screen::Detail);
        }
    }

    /// Move to a screen, routing guarded targets through the login flow.
    fn navigate(&mut self, target: Screen) {
        if target == Screen::Profile && !self.auth.is_logged_in() {
            self.guard(Screen::Profile);
            return;
        }

        if target == Screen::Compare {
            // Tab navigation drops any previously chosen opponent; the
            // anchor survives so a viewed product stays in the first slot.
            self.compare.clear(CompareSlot::Second);
        }

        tracing::debug!(from = %self.screen(), to = %target, "screen change");
        self.navigator.go(target);
    }

    /// Navigate if logged in; otherwise defer the target and open the
    /// login prompt.
    fn guard(&mut self, target: Screen) {
        if self.auth.is_logged_in() {
            self.navigate(target);
        } else {
            tracing::info!(target = %target, "deferring guarded navigation until login");
            self.auth.defer(target);
        }
    }

    /// Successful mock login: resume the deferred navigation, if any.
    fn resolve_login(&mut self) {
        if let Some(target) = self.auth.resolve() {
            tracing::info!(target = %target, "resuming guarded navigation");
            self.navigate(target);
        }
    }

    fn back(&mut self) {
        let leaving = self.navigator.current();
        self.navigator.back();

        // The selection survives a round trip into comparison mode.
        if leaving != Screen::Compare && self.navigator.current() != Screen::Compare {
            self.selected = None;
        }
    }

    fn request_compare(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };

        match CompareSlots::seed(&self.catalog, selected) {
            Some(slots) => {
                self.compare = slots;
                self.navigator.go(Screen::Compare);
            }
            None => self.notice = Some(Notice::NoComparableProduct),
        }
    }

    fn place_order(&mut self) {
        tracing::info!(
            items = self.cart.item_count(),
            total = %self.cart.total(&self.catalog),
            "order placed"
        );

        self.cart.clear();
        self.notice = Some(Notice::OrderConfirmed);
        self.navigate(Screen::Home);
    }
}
