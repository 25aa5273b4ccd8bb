//! Navigation
//!
//! Screen navigation is a closed state machine: eight screens, transitions
//! driven only by explicit calls. The navigator remembers the single screen
//! occupied before the most recent transition, enabling one level of back
//! traversal; it is not a history stack.

use std::fmt;

/// The screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing screen with hero banner and product rows.
    Home,

    /// Full catalog with search and category chips.
    Store,

    /// Single product detail view.
    Detail,

    /// Cart ledger view.
    Cart,

    /// Order summary and mock payment.
    Checkout,

    /// Two-slot product comparison.
    Compare,

    /// Wishlisted products.
    Wishlist,

    /// Account screen; requires a logged-in session.
    Profile,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Store => "store",
            Screen::Detail => "detail",
            Screen::Cart => "cart",
            Screen::Checkout => "checkout",
            Screen::Compare => "compare",
            Screen::Wishlist => "wishlist",
            Screen::Profile => "profile",
        };

        write!(f, "{name}")
    }
}

/// Current and previous screen. Starts on [`Screen::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    previous: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            current: Screen::Home,
            previous: Screen::Home,
        }
    }
}

impl Navigator {
    /// Create a navigator on the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently shown.
    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The screen occupied immediately before the most recent navigation.
    #[must_use]
    pub fn previous(&self) -> Screen {
        self.previous
    }

    /// Move to a screen, remembering the one being left.
    pub fn go(&mut self, target: Screen) {
        self.previous = self.current;
        self.current = target;
    }

    /// Return to the previously occupied screen. The remembered previous
    /// screen is left untouched, as in the source UI.
    pub fn back(&mut self) {
        self.current = self.previous;
    }
}
