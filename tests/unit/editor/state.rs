use super::*;
use crate::foundation::clock::FixedClock;
use serde_json::json;

#[test]
fn defaults_take_the_date_from_the_clock() {
    // 2026-10-18T12:00:00Z
    let clock = FixedClock::from_unix_millis(1_792_324_800_000);
    let s = EditorState::new(&clock);
    assert_eq!(s.date_badge, "October 18, 2026");
    assert_eq!(s.headline, "Your Headline Here");
    assert_eq!(s.footer, "YOUR BRAND");
    assert_eq!(s.active_template, "white-gradient");
    assert_eq!(s.overlay_opacity, 0.0);
    assert!(s.photo.is_none());
    assert!(s.logo.is_none());
}

#[test]
fn serializes_with_camel_case_keys() {
    let s = EditorState::with_date_badge("today");
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["headlineColor"], json!("#1a1a1a"));
    assert_eq!(v["overlayOpacity"], json!(0.0));
    assert_eq!(v["activeTemplate"], json!("white-gradient"));
    assert_eq!(v["photo"], json!(null));

    let back: EditorState = serde_json::from_value(v).unwrap();
    assert_eq!(back, s);
}
