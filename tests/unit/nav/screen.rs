use super::*;

#[test]
fn initial_screen_is_home() {
    assert_eq!(Screen::default(), Screen::Home);
}

#[test]
fn happy_path() {
    let s = Screen::Home.next(NavAction::Browse, 0);
    assert_eq!(s, Screen::Catalog);
    let s = s.next(NavAction::PickProduct, 0);
    assert_eq!(s, Screen::Customize);
    let s = s.next(NavAction::Commit, 1);
    assert_eq!(s, Screen::Cart);
    let s = s.next(NavAction::Checkout, 1);
    assert_eq!(s, Screen::Checkout);
}

#[test]
fn back_goes_home_from_everywhere() {
    for s in Screen::ALL {
        assert_eq!(s.next(NavAction::Back, 0), Screen::Home);
        assert_eq!(s.next(NavAction::Back, 3), Screen::Home);
    }
}

#[test]
fn checkout_requires_items() {
    assert_eq!(Screen::Cart.next(NavAction::Checkout, 0), Screen::Cart);
    assert_eq!(Screen::Cart.next(NavAction::Checkout, 2), Screen::Checkout);
}

#[test]
fn unlisted_pairs_are_noops() {
    let listed = [
        (Screen::Home, NavAction::Browse),
        (Screen::Catalog, NavAction::PickProduct),
        (Screen::Customize, NavAction::Commit),
        (Screen::Cart, NavAction::Checkout),
    ];
    let actions = [
        NavAction::Browse,
        NavAction::PickProduct,
        NavAction::Commit,
        NavAction::Checkout,
    ];
    for s in Screen::ALL {
        for a in actions {
            if listed.contains(&(s, a)) {
                continue;
            }
            assert_eq!(s.next(a, 5), s, "{s:?} + {a:?}");
        }
    }
}

#[test]
fn titles() {
    assert_eq!(Screen::Cart.to_string(), "Shopping Cart");
    assert_eq!(Screen::Customize.title(), "Customize Product");
}
