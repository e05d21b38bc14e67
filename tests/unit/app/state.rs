use std::io::Cursor;

use super::*;
use crate::render::PreviewOpts;

fn app() -> AppState {
    let renderer = PreviewRenderer::new(PreviewOpts::default(), None).unwrap();
    AppState::from_parts(Catalog::builtin().unwrap(), renderer, UploadOpts::default())
}

fn app_in_customize(product: usize) -> AppState {
    let mut app = app();
    app.update(Message::Browse);
    app.update(Message::PickProduct(ProductId(product)));
    assert_eq!(app.screen(), Screen::Customize);
    app
}

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "snapshop_state_test_{}_{}_{name}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, bytes).unwrap();
    path
}

fn png_file(name: &str, rgba: [u8; 4]) -> PathBuf {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(8, 8, image::Rgba(rgba)))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    temp_file(name, &buf)
}

#[test]
fn starts_home_with_empty_cart() {
    let app = app();
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.cart().is_empty());
    assert!(app.preview().is_some());
}

#[test]
fn picking_a_product_selects_it_and_navigates() {
    let app = app_in_customize(1);
    assert_eq!(
        app.customization().product().unwrap().name,
        "Photo T-Shirt"
    );
}

#[test]
fn pick_is_ignored_outside_catalog_and_for_unknown_ids() {
    let mut app = app();
    app.update(Message::PickProduct(ProductId(0)));
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.customization().product().is_none());

    app.update(Message::Browse);
    app.update(Message::PickProduct(ProductId(99)));
    assert_eq!(app.screen(), Screen::Catalog);
    assert!(app.customization().product().is_none());
}

#[test]
fn preview_tracks_every_mutation() {
    let mut app = app_in_customize(0);

    app.update(Message::SetProductColor(Rgba8::RED));
    assert_eq!(app.preview_revision(), Some(app.customization().revision()));
    assert_eq!(app.preview().unwrap().pixel(5, 5), Some([255, 0, 0, 255]));

    app.update(Message::SetProductColor(Rgba8::BLACK));
    assert_eq!(app.preview().unwrap().pixel(5, 5), Some([0, 0, 0, 255]));

    app.update(Message::SetSize(Size::XL));
    app.update(Message::SetOverlayText("hi".to_owned()));
    app.update(Message::SetTextColor(Rgba8::WHITE));
    assert_eq!(app.preview_revision(), Some(app.customization().revision()));
    assert_eq!(app.preview().unwrap().pixel(5, 5), Some([0, 0, 0, 255]));
}

#[test]
fn upload_then_corrupt_upload_keeps_first_image() {
    let mut app = app_in_customize(2);
    let good = png_file("good.png", [0, 255, 0, 255]);
    app.update(Message::UploadImage(good.clone()));
    let first = app.customization().image().cloned().unwrap();
    let center = app.preview().unwrap().pixel(150, 150).unwrap();
    assert!(center[1] >= 253 && center[0] <= 2);

    let bad = temp_file("bad.jpg", b"\xFF\xD8\xFF not a jpeg");
    app.update(Message::UploadImage(bad.clone()));
    assert_eq!(app.customization().image(), Some(&first));
    assert_eq!(app.preview().unwrap().pixel(150, 150).unwrap(), center);

    let missing = std::env::temp_dir().join("snapshop_state_test_missing.png");
    app.update(Message::UploadImage(missing));
    assert_eq!(app.customization().image(), Some(&first));

    std::fs::remove_file(&good).ok();
    std::fs::remove_file(&bad).ok();
}

#[test]
fn unsupported_extension_is_not_decoded() {
    let mut app = app_in_customize(0);
    let gif_named_png = png_file("image.gif", [1, 2, 3, 255]);
    app.update(Message::UploadImage(gif_named_png.clone()));
    assert!(app.customization().image().is_none());
    std::fs::remove_file(&gif_named_png).ok();
}

#[test]
fn add_to_cart_snapshots_resets_and_navigates() {
    let mut app = app_in_customize(0);
    app.update(Message::SetProductColor(Rgba8::RED));
    app.update(Message::SetSize(Size::L));
    app.update(Message::SetOverlayText("mug".to_owned()));
    app.update(Message::AddToCart);

    assert_eq!(app.screen(), Screen::Cart);
    assert_eq!(app.cart().len(), 1);
    let item = &app.cart().items()[0];
    assert_eq!(item.product().name, "Photo Mug");
    assert_eq!(item.size(), Size::L);
    assert_eq!(item.color(), Rgba8::RED);
    assert_eq!(item.preview().pixel(5, 5), Some([255, 0, 0, 255]));

    assert_eq!(app.customization().overlay_text(), "");
    assert_eq!(app.customization().size(), Size::M);
    assert_eq!(app.customization().product_color(), Rgba8::WHITE);
    assert_eq!(app.preview().unwrap().pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn cart_snapshot_is_frozen_against_later_edits() {
    let mut app = app_in_customize(0);
    app.update(Message::SetProductColor(Rgba8::PRIMARY));
    app.update(Message::AddToCart);
    let snapshot = app.cart().items()[0].preview().clone();

    app.update(Message::Back);
    app.update(Message::Browse);
    app.update(Message::PickProduct(ProductId(0)));
    app.update(Message::SetProductColor(Rgba8::BLACK));

    assert_eq!(app.cart().items()[0].preview().pixel(5, 5), Some([59, 130, 246, 255]));
    assert!(Arc::ptr_eq(&snapshot, app.cart().items()[0].preview()));
}

#[test]
fn add_to_cart_outside_customize_is_ignored() {
    let mut app = app();
    app.update(Message::AddToCart);
    assert!(app.cart().is_empty());
    assert_eq!(app.screen(), Screen::Home);
}

#[test]
fn checkout_requires_a_non_empty_cart() {
    let mut app = app_in_customize(0);
    app.update(Message::AddToCart);
    let id = app.cart().items()[0].id();
    app.update(Message::RemoveCartItem(id));
    assert!(app.cart().is_empty());

    app.update(Message::Checkout);
    assert_eq!(app.screen(), Screen::Cart);

    app.update(Message::Back);
    app.update(Message::Browse);
    app.update(Message::PickProduct(ProductId(1)));
    app.update(Message::AddToCart);
    app.update(Message::Checkout);
    assert_eq!(app.screen(), Screen::Checkout);

    app.update(Message::Back);
    assert_eq!(app.screen(), Screen::Home);
}

#[test]
fn remove_by_stale_id_is_harmless() {
    let mut app = app();
    for p in [0, 1, 2] {
        app.update(Message::Back);
        app.update(Message::Browse);
        app.update(Message::PickProduct(ProductId(p)));
        app.update(Message::AddToCart);
    }
    assert_eq!(app.cart().total().0, 499 + 799 + 699);

    let first = app.cart().items()[0].id();
    let last = app.cart().items()[2].id();
    app.update(Message::RemoveCartItem(first));
    app.update(Message::RemoveCartItem(last));
    app.update(Message::RemoveCartItem(last));

    let names: Vec<&str> = app
        .cart()
        .items()
        .iter()
        .map(|i| i.product().name.as_str())
        .collect();
    assert_eq!(names, ["Photo T-Shirt"]);
}

fn app_with_fixture_font() -> AppState {
    let font = LoadedFont::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/fonts/DejaVuSans-Bold.ttf"
    ))
    .unwrap();
    let renderer = PreviewRenderer::new(PreviewOpts::default(), Some(&font)).unwrap();
    AppState::from_parts(Catalog::builtin().unwrap(), renderer, UploadOpts::default())
}

fn text_band(frame: &PreviewFrame) -> Vec<[u8; 4]> {
    (255..290)
        .flat_map(|y| (0..frame.width).map(move |x| (x, y)))
        .filter_map(|(x, y)| frame.pixel(x, y))
        .collect()
}

#[test]
fn text_color_message_recolors_overlay_text() {
    let mut app = app_with_fixture_font();
    app.update(Message::Browse);
    app.update(Message::PickProduct(ProductId(0)));
    let blank = text_band(app.preview().unwrap());
    assert!(blank.iter().all(|p| *p == [255, 255, 255, 255]));

    app.update(Message::SetOverlayText("SNAPSHOP".to_owned()));
    let black = text_band(app.preview().unwrap());
    assert!(black.iter().any(|p| p[0] < 16 && p[1] < 16 && p[2] < 16));

    app.update(Message::SetTextColor(Rgba8::RED));
    let red = text_band(app.preview().unwrap());
    assert_ne!(black, red);
    assert!(red.iter().any(|p| p[0] > 240 && p[1] < 16 && p[2] < 16));
    assert!(!red.iter().any(|p| p[0] < 16 && p[1] < 16 && p[2] < 16));
}
