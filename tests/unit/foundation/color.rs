use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#DC2626"), Some(Rgb8::new(0xdc, 0x26, 0x26)));
    assert_eq!(Rgb8::parse_hex("1e3a5f"), Some(Rgb8::new(0x1e, 0x3a, 0x5f)));
}

#[test]
fn malformed_hex_degrades_to_black() {
    for bad in ["notacolor", "#fff", "#12345", "#1234567", " #000000", "transparent", ""] {
        assert_eq!(Rgb8::from_hex_or_black(bad), Rgb8::BLACK, "input {bad:?}");
    }
    // Non-ascii input must not panic on byte slicing.
    assert_eq!(Rgb8::from_hex_or_black("#ééé"), Rgb8::BLACK);
}

#[test]
fn hsl_cyan_badge_color() {
    let c = Rgb8::from_hsl(190.0, 1.0, 0.5);
    assert_eq!((c.r, c.b), (0, 255));
    assert!((212..=213).contains(&c.g));
}

#[test]
fn css_rgba_prints_alpha_like_css() {
    assert_eq!(Rgb8::BLACK.css_rgba(0.6), "rgba(0,0,0,0.6)");
    assert_eq!(Rgb8::WHITE.css_rgba(0.0), "rgba(255,255,255,0)");
    assert_eq!(Rgb8::WHITE.css_rgba(1.0), "rgba(255,255,255,1)");
}
