use std::io::Cursor;

use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn completed_upload_yields_the_manual_patch_shape() {
    let png = tiny_png();
    let pending = submit_upload(ImageSlot::Photo, png.clone()).unwrap();
    assert_eq!(pending.slot(), ImageSlot::Photo);

    let patch = pending.wait().unwrap();
    let expected = ControlEvent::ImageLoaded {
        slot: ImageSlot::Photo,
        data: ImageData::encode(&png).unwrap(),
    }
    .into_patch();
    assert_eq!(patch, expected);
    assert!(patch.logo.is_none());
}

#[test]
fn undecodable_upload_reports_decode_error() {
    let pending = submit_upload(ImageSlot::Logo, b"nope".to_vec()).unwrap();
    assert!(matches!(pending.wait(), Err(PostError::Decode(_))));
}

#[test]
fn missing_file_reports_error() {
    let pending =
        submit_upload_file(ImageSlot::Logo, "target/does/not/exist/logo.png").unwrap();
    let err = pending.wait().unwrap_err();
    assert!(err.to_string().contains("read upload"));
}
