use super::*;
use serde_json::json;

fn base() -> EditorState {
    EditorState::with_date_badge("October 18, 2026")
}

#[test]
fn headline_patch_changes_only_headline() {
    let prev = base();
    let patch = EditorPatch {
        headline: Some("X".to_owned()),
        ..EditorPatch::default()
    };

    let next = apply_patch(&prev, &patch);
    assert_eq!(next.headline, "X");

    let mut expected = prev.clone();
    expected.headline = "X".to_owned();
    assert_eq!(next, expected);
    // Input state untouched.
    assert_eq!(prev.headline, "Your Headline Here");
}

#[test]
fn applying_twice_equals_applying_once() {
    let patch = EditorPatch {
        body: Some(String::new()),
        overlay_opacity: Some(0.25),
        active_template: Some("split".to_owned()),
        ..EditorPatch::default()
    };
    let once = apply_patch(&base(), &patch);
    let twice = apply_patch(&once, &patch);
    assert_eq!(once, twice);
    assert_eq!(once.body, "");
}

#[test]
fn empty_patch_is_identity() {
    assert!(EditorPatch::new().is_empty());
    assert_eq!(apply_patch(&base(), &EditorPatch::new()), base());
}

#[test]
fn invalid_values_are_accepted_verbatim() {
    let patch = EditorPatch {
        overlay_color: Some("notacolor".to_owned()),
        overlay_direction: Some("diagonal".to_owned()),
        active_template: Some("polaroid".to_owned()),
        overlay_opacity: Some(3.0),
        ..EditorPatch::default()
    };
    let next = apply_patch(&base(), &patch);
    assert_eq!(next.overlay_color, "notacolor");
    assert_eq!(next.overlay_direction, "diagonal");
    assert_eq!(next.active_template, "polaroid");
    assert_eq!(next.overlay_opacity, 3.0);
}

#[test]
fn preset_patch_sets_three_fields() {
    let dark = OverlayPreset::find("dark").unwrap();
    let next = apply_patch(&base(), &EditorPatch::from_preset(dark));
    assert_eq!(next.overlay_color, "#000000");
    assert_eq!(next.overlay_opacity, 0.6);
    assert_eq!(next.overlay_style, "dark");
}

#[test]
fn json_null_clears_image_and_absent_key_keeps_it() {
    let mut with_photo = base();
    with_photo.photo = Some(ImageData::from_data_uri("data:image/png;base64,AAAA"));

    let keep: EditorPatch = serde_json::from_value(json!({ "headline": "Hi" })).unwrap();
    assert_eq!(keep.photo, None);
    assert!(apply_patch(&with_photo, &keep).photo.is_some());

    let clear: EditorPatch = serde_json::from_value(json!({ "photo": null })).unwrap();
    assert_eq!(clear.photo, Some(None));
    assert!(apply_patch(&with_photo, &clear).photo.is_none());
}

#[test]
fn json_rejects_unknown_keys() {
    let res = serde_json::from_value::<EditorPatch>(json!({ "headLine": "typo" }));
    assert!(res.is_err());
}

#[test]
fn serialized_patch_only_lists_set_fields() {
    let patch = EditorPatch {
        logo: Some(None),
        accent_color: Some("#00ff00".to_owned()),
        ..EditorPatch::default()
    };
    let v = serde_json::to_value(&patch).unwrap();
    assert_eq!(v, json!({ "logo": null, "accentColor": "#00ff00" }));

    let back: EditorPatch = serde_json::from_value(v).unwrap();
    assert_eq!(back, patch);
}

#[test]
fn merge_prefers_later_fields() {
    let a = EditorPatch {
        headline: Some("A".to_owned()),
        body: Some("a".to_owned()),
        ..EditorPatch::default()
    };
    let b = EditorPatch {
        headline: Some("B".to_owned()),
        ..EditorPatch::default()
    };
    let merged = a.merge(b);
    assert_eq!(merged.headline.as_deref(), Some("B"));
    assert_eq!(merged.body.as_deref(), Some("a"));
}
