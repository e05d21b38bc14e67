use super::*;
use crate::catalog::Catalog;

fn preview(shade: u8) -> Arc<PreviewFrame> {
    Arc::new(PreviewFrame {
        width: 2,
        height: 2,
        data: [shade, shade, shade, 255].repeat(4),
    })
}

fn cart_of(names: &[&str]) -> Cart {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = Cart::new();
    for (i, name) in names.iter().enumerate() {
        let p = catalog.find_by_name(name).unwrap().1.clone();
        cart.add(p, preview(i as u8), Size::M, Rgba8::WHITE);
    }
    cart
}

fn names(cart: &Cart) -> Vec<&str> {
    cart.items()
        .iter()
        .map(|i| i.product().name.as_str())
        .collect()
}

#[test]
fn total_sums_product_prices() {
    let cart = cart_of(&["Photo Mug", "Photo T-Shirt"]);
    assert_eq!(cart.total(), Price(1298));
    assert_eq!(Cart::new().total(), Price(0));
}

#[test]
fn remove_each_index_preserves_relative_order() {
    let all = ["Photo Mug", "Photo T-Shirt", "Photo Frame", "Photo Mug"];
    for i in 0..all.len() {
        let mut cart = cart_of(&all);
        let removed = cart.remove(i).unwrap();
        assert_eq!(removed.product().name, all[i]);
        assert_eq!(cart.len(), all.len() - 1);

        let mut expected = all.to_vec();
        expected.remove(i);
        assert_eq!(names(&cart), expected);
    }
}

#[test]
fn out_of_range_remove_leaves_cart_intact() {
    let mut cart = cart_of(&["Photo Mug", "Photo Frame"]);
    let err = cart.remove(2).unwrap_err();
    assert!(matches!(
        err,
        ShopError::CartIndexOutOfRange { index: 2, len: 2 }
    ));
    assert_eq!(names(&cart), ["Photo Mug", "Photo Frame"]);
    assert!(Cart::new().remove(0).is_err());
}

#[test]
fn ids_survive_index_shifts() {
    let mut cart = cart_of(&["Photo Mug", "Photo T-Shirt", "Photo Frame"]);
    let frame_id = cart.items()[2].id();
    let shirt_id = cart.items()[1].id();

    cart.remove(0).unwrap();
    assert_eq!(cart.index_of(frame_id), Some(1));

    // Removing by the now-stale index 2 would be out of range; the id still resolves.
    assert!(cart.remove(2).is_err());
    let removed = cart.remove_by_id(frame_id).unwrap();
    assert_eq!(removed.product().name, "Photo Frame");
    assert_eq!(names(&cart), ["Photo T-Shirt"]);

    assert!(matches!(
        cart.remove_by_id(frame_id),
        Err(ShopError::UnknownCartItem(_))
    ));
    assert_eq!(cart.index_of(shirt_id), Some(0));
}

#[test]
fn ids_are_never_reused() {
    let mut cart = cart_of(&["Photo Mug"]);
    let first = cart.items()[0].id();
    cart.remove(0).unwrap();
    let catalog = Catalog::builtin().unwrap();
    let id = cart.add(catalog.products()[0].clone(), preview(9), Size::S, Rgba8::RED);
    assert_ne!(id, first);
    assert_eq!(cart.get(0).unwrap().size(), Size::S);
    assert_eq!(cart.get(0).unwrap().color(), Rgba8::RED);
}

#[test]
fn items_keep_their_snapshot() {
    let cart = cart_of(&["Photo Mug", "Photo Frame"]);
    assert_eq!(cart.items()[0].preview().pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(cart.items()[1].preview().pixel(1, 1), Some([1, 1, 1, 255]));
}
