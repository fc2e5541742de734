use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::clock::FixedClock, overlay::model::OverlayPreset, scene::LayerRole,
    template::TemplateKind,
};

fn store() -> EditorStore {
    EditorStore::with_clock(&FixedClock::from_unix_millis(1_792_324_800_000))
}

#[test]
fn apply_swaps_state_and_bumps_revision() {
    let mut s = store();
    assert_eq!(s.revision(), 0);

    let patch = EditorPatch {
        headline: Some("Breaking".to_owned()),
        ..EditorPatch::default()
    };
    assert_eq!(s.apply(&patch).headline, "Breaking");
    assert_eq!(s.revision(), 1);
    assert_eq!(s.state().footer, "YOUR BRAND");
}

#[test]
fn subscribers_see_every_new_state_in_full() {
    let seen: Rc<RefCell<Vec<(String, f64)>>> = Rc::default();
    let mut s = store();
    {
        let seen = Rc::clone(&seen);
        s.subscribe(move |st| {
            seen.borrow_mut()
                .push((st.overlay_style.clone(), st.overlay_opacity))
        });
    }

    s.dispatch(ControlEvent::ApplyPreset(
        OverlayPreset::find("dark").unwrap(),
    ));
    s.dispatch(ControlEvent::SetOverlayOpacity(0.3));

    assert_eq!(
        *seen.borrow(),
        vec![("dark".to_owned(), 0.6), ("custom".to_owned(), 0.3)]
    );
}

#[test]
fn preview_follows_active_template() {
    let mut s = store();
    assert_eq!(s.preview().template, TemplateKind::WhiteGradient);

    s.dispatch(ControlEvent::SelectTemplate(TemplateKind::Split));
    let comp = s.preview();
    assert_eq!(comp.template, TemplateKind::Split);
    assert!(comp.text(LayerRole::Headline).is_some());
}

#[test]
fn preview_snapshot_is_detached_from_later_edits() {
    let mut s = store();
    let snapshot = s.preview();
    s.dispatch(ControlEvent::EditText {
        field: crate::editor::control::TextField::Headline,
        value: "Changed".to_owned(),
    });
    assert_eq!(
        snapshot.text(LayerRole::Headline).unwrap().text,
        "Your Headline Here"
    );
    assert_eq!(
        s.preview().text(LayerRole::Headline).unwrap().text,
        "Changed"
    );
}
