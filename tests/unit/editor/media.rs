use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn tiny_bmp() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(3, 1, image::Rgb([0, 128, 255]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Bmp)
        .unwrap();
    buf
}

#[test]
fn png_is_embedded_verbatim() {
    let png = tiny_png();
    let data = ImageData::encode(&png).unwrap();
    assert!(data.as_str().starts_with("data:image/png;base64,"));
    assert_eq!(data.mime(), Some("image/png"));
    assert_eq!(data.decode_payload().unwrap(), png);
}

#[test]
fn other_formats_are_reencoded_as_png() {
    let data = ImageData::encode(&tiny_bmp()).unwrap();
    assert_eq!(data.mime(), Some("image/png"));
    let bytes = data.decode_payload().unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Png
    );
}

#[test]
fn garbage_bytes_fail_to_encode() {
    let err = ImageData::encode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PostError::Decode(_)));
}

#[test]
fn non_base64_uri_is_rejected_on_decode() {
    let data = ImageData::from_data_uri("data:image/svg+xml,<svg/>");
    assert_eq!(data.mime(), Some("image/svg+xml"));
    assert!(data.decode_payload().is_err());
    assert!(ImageData::from_data_uri("/tmp/photo.png").decode_payload().is_err());
}

#[test]
fn debug_does_not_dump_payload() {
    let data = ImageData::encode(&tiny_png()).unwrap();
    let dbg = format!("{data:?}");
    assert!(dbg.contains("image/png"));
    assert!(!dbg.contains("base64"));
}
