use super::*;
use crate::{editor::state::EditorState, overlay::gradient::GradientShape};

fn state(color: &str, opacity: f64, direction: &str) -> EditorState {
    let mut s = EditorState::with_date_badge("October 18, 2026");
    s.overlay_color = color.to_owned();
    s.overlay_opacity = opacity;
    s.overlay_direction = direction.to_owned();
    s
}

#[test]
fn zero_opacity_is_no_overlay_whatever_else_is_set() {
    for dir in ["bottom", "top", "left", "right", "center", "bogus"] {
        for color in ["#FFFFFF", "notacolor", "#8B4513"] {
            assert_eq!(
                build_overlay_gradient(&state(color, 0.0, dir)),
                Overlay::None
            );
        }
    }
    assert_eq!(build_overlay_gradient(&state("#000000", 0.0, "top")).to_css(), "none");
}

#[test]
fn center_is_radial_with_fixed_inner_stop() {
    for a in [0.05, 0.45, 1.0] {
        let overlay = build_overlay_gradient(&state("#1E3A5F", a, "center"));
        let g = overlay.gradient().unwrap();
        assert_eq!(g.shape, GradientShape::Radial);

        let inner = g.near_stop().unwrap();
        assert_eq!(inner.offset, Some(0.2));
        assert_eq!(inner.alpha, 0.0);

        let outer = g.far_stop().unwrap();
        assert_eq!(outer.offset, Some(1.0));
        assert_eq!(outer.alpha, a);
        assert_eq!(outer.color, Rgb8::new(0x1e, 0x3a, 0x5f));
    }
}

#[test]
fn linear_axes_follow_direction_table() {
    let cases = [
        ("bottom", LinearAxis::ToTop),
        ("top", LinearAxis::ToBottom),
        ("left", LinearAxis::ToRight),
        ("right", LinearAxis::ToLeft),
    ];
    for (dir, axis) in cases {
        let overlay = build_overlay_gradient(&state("#8B0000", 0.45, dir));
        let g = overlay.gradient().unwrap();
        assert_eq!(g.shape, GradientShape::Linear(axis), "direction {dir}");
        assert_eq!(g.near_stop().unwrap().alpha, 0.45);
        assert_eq!(g.far_stop().unwrap().alpha, 0.0);
        assert_eq!(g.far_stop().unwrap().color, Rgb8::new(0x8b, 0, 0));
    }
}

#[test]
fn unknown_direction_falls_back_to_top_axis() {
    let overlay = build_overlay_gradient(&state("#000000", 0.5, "diagonal"));
    assert_eq!(
        overlay.gradient().unwrap().shape,
        GradientShape::Linear(LinearAxis::ToTop)
    );
}

#[test]
fn malformed_color_decodes_to_black() {
    let overlay = build_overlay_gradient(&state("notacolor", 0.5, "bottom"));
    assert_eq!(
        overlay.to_css(),
        "linear-gradient(to top, rgba(0,0,0,0.5), rgba(0,0,0,0))"
    );
}

#[test]
fn out_of_range_opacity_is_passed_through() {
    let overlay = build_overlay_gradient(&state("#FFFFFF", 1.5, "top"));
    assert_eq!(overlay.gradient().unwrap().near_stop().unwrap().alpha, 1.5);
}

#[test]
fn radial_css_is_exact() {
    let overlay = build_overlay_gradient(&state("#FFFFFF", 0.7, "center"));
    assert_eq!(
        overlay.to_css(),
        "radial-gradient(circle, rgba(255,255,255,0) 20%, rgba(255,255,255,0.7) 100%)"
    );
}

#[test]
fn deterministic_for_equal_states() {
    let s = state("#8B4513", 0.4, "left");
    assert_eq!(build_overlay_gradient(&s), build_overlay_gradient(&s.clone()));
}

#[test]
fn tables_are_complete() {
    let ids: Vec<_> = OVERLAY_PRESETS.iter().map(|p| p.id).collect();
    assert_eq!(ids, ["none", "dark", "light", "warm", "cool", "red"]);
    assert!(OverlayPreset::find(CUSTOM_STYLE_ID).is_none());

    let ids: Vec<_> = OVERLAY_DIRECTIONS.iter().map(|d| d.id).collect();
    assert_eq!(ids, ["bottom", "top", "left", "right", "center"]);
    assert_eq!(
        OverlayDirection::find("center").unwrap().axis,
        DirectionAxis::Radial
    );
}
