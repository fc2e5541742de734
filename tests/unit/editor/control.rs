use super::*;
use crate::editor::{patch::apply_patch, state::EditorState};

fn base() -> EditorState {
    EditorState::with_date_badge("October 18, 2026")
}

#[test]
fn text_events_touch_one_field() {
    let p = ControlEvent::EditText {
        field: TextField::Footer,
        value: "ACME".to_owned(),
    }
    .into_patch();
    assert_eq!(
        p,
        EditorPatch {
            footer: Some("ACME".to_owned()),
            ..EditorPatch::default()
        }
    );
}

#[test]
fn font_pick_stores_descriptor() {
    let p = ControlEvent::PickFont {
        field: TextField::Body,
        font: FontFamily::PlayfairDisplay,
    }
    .into_patch();
    assert_eq!(p.body_font.as_deref(), Some("'Playfair Display', serif"));
}

#[test]
fn opacity_is_clamped_and_marks_custom() {
    let s = apply_patch(&base(), &ControlEvent::SetOverlayOpacity(1.7).into_patch());
    assert_eq!(s.overlay_opacity, 1.0);
    assert_eq!(s.overlay_style, "custom");

    let s = apply_patch(&base(), &ControlEvent::SetOverlayOpacity(f64::NAN).into_patch());
    assert_eq!(s.overlay_opacity, 0.0);
}

#[test]
fn overlay_color_pick_marks_custom() {
    let p = ControlEvent::PickOverlayColor("#123456".to_owned()).into_patch();
    assert_eq!(p.overlay_color.as_deref(), Some("#123456"));
    assert_eq!(p.overlay_style.as_deref(), Some("custom"));
    assert_eq!(p.overlay_opacity, None);
}

#[test]
fn preset_event_matches_preset_patch() {
    let warm = OverlayPreset::find("warm").unwrap();
    assert_eq!(
        ControlEvent::ApplyPreset(warm).into_patch(),
        EditorPatch::from_preset(warm)
    );
}

#[test]
fn template_and_direction_use_wire_ids() {
    let p = ControlEvent::SelectTemplate(TemplateKind::DarkBold).into_patch();
    assert_eq!(p.active_template.as_deref(), Some("dark-bold"));

    let center = OverlayDirection::find("center").unwrap();
    let p = ControlEvent::SetOverlayDirection(center).into_patch();
    assert_eq!(p.overlay_direction.as_deref(), Some("center"));
}

#[test]
fn image_events_set_and_clear_slots() {
    let data = ImageData::from_data_uri("data:image/png;base64,AAAA");
    let loaded = ControlEvent::ImageLoaded {
        slot: ImageSlot::Logo,
        data: data.clone(),
    }
    .into_patch();
    let s = apply_patch(&base(), &loaded);
    assert_eq!(s.logo, Some(data));
    assert!(s.photo.is_none());

    let s = apply_patch(&s, &ControlEvent::ClearImage(ImageSlot::Logo).into_patch());
    assert!(s.logo.is_none());
}
