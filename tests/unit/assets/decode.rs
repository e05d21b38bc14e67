use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "snapshop_decode_test_{}_{}_{name}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn decode_png_dimensions_and_premul() {
    let prepared = decode_image(&png_bytes(1, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn transparent_pixels_zero_their_color() {
    let prepared = decode_image(&png_bytes(2, 1, [10, 20, 30, 0])).unwrap();
    assert_eq!(prepared.rgba8_premul.as_slice(), &[0u8; 8]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = decode_image(b"definitely not a png").unwrap_err();
    assert!(matches!(err, ShopError::Decode(_)));

    let mut truncated = png_bytes(4, 4, [1, 2, 3, 255]);
    truncated.truncate(truncated.len() / 2);
    assert!(decode_image(&truncated).is_err());
}

#[test]
fn load_image_file_reads_from_disk() {
    let path = temp_path("ok.png");
    std::fs::write(&path, png_bytes(3, 2, [9, 9, 9, 255])).unwrap();
    let img = load_image_file(&path).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    std::fs::remove_file(&path).ok();
}

#[test]
fn load_image_file_missing_path_names_the_file() {
    let path = temp_path("missing.png");
    let err = load_image_file(&path).unwrap_err();
    assert!(matches!(err, ShopError::Other(_)));
    assert!(err.to_string().contains("missing.png"));
}

#[test]
fn upload_filter_is_case_insensitive() {
    let opts = UploadOpts::default();
    assert!(opts.accepts(Path::new("a/b/photo.PNG")));
    assert!(opts.accepts(Path::new("photo.jpeg")));
    assert!(opts.accepts(Path::new("photo.Jpg")));
    assert!(!opts.accepts(Path::new("photo.gif")));
    assert!(!opts.accepts(Path::new("png")));
}

#[test]
fn upload_opts_validation() {
    assert!(UploadOpts::default().validate().is_ok());
    assert!(UploadOpts { extensions: vec![] }.validate().is_err());
    assert!(
        UploadOpts {
            extensions: vec![".png".to_owned()]
        }
        .validate()
        .is_err()
    );
}
