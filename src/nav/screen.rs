use std::fmt;

/// One full-window view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Catalog,
    Customize,
    Cart,
    Checkout,
}

/// User intent that may move between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    Browse,
    PickProduct,
    Commit,
    Checkout,
    Back,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Catalog,
        Screen::Customize,
        Screen::Cart,
        Screen::Checkout,
    ];

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "SnapShop",
            Screen::Catalog => "Catalog",
            Screen::Customize => "Customize Product",
            Screen::Cart => "Shopping Cart",
            Screen::Checkout => "Checkout",
        }
    }

    /// Transition function. Pairs not listed here leave the screen unchanged.
    ///
    /// `cart_len` guards checkout: an empty cart never reaches [`Screen::Checkout`].
    pub fn next(self, action: NavAction, cart_len: usize) -> Screen {
        match (self, action) {
            (_, NavAction::Back) => Screen::Home,
            (Screen::Home, NavAction::Browse) => Screen::Catalog,
            (Screen::Catalog, NavAction::PickProduct) => Screen::Customize,
            (Screen::Customize, NavAction::Commit) => Screen::Cart,
            (Screen::Cart, NavAction::Checkout) if cart_len > 0 => Screen::Checkout,
            (current, _) => current,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/screen.rs"]
mod tests;
