use super::*;

fn black(alpha: f64) -> GradientStop {
    GradientStop::new(Rgb8::BLACK, alpha)
}

#[test]
fn linear_css_matches_browser_syntax() {
    let g = GradientSpec::linear(LinearAxis::ToTop, vec![black(0.6), black(0.0)]);
    assert_eq!(
        g.to_css(),
        "linear-gradient(to top, rgba(0,0,0,0.6), rgba(0,0,0,0))"
    );
}

#[test]
fn radial_css_prints_percentages() {
    let c = Rgb8::new(30, 58, 95);
    let g = GradientSpec::radial(vec![
        GradientStop::at(c, 0.0, 0.2),
        GradientStop::at(c, 0.5, 1.0),
    ]);
    assert_eq!(
        g.to_css(),
        "radial-gradient(circle, rgba(30,58,95,0) 20%, rgba(30,58,95,0.5) 100%)"
    );
}

#[test]
fn implicit_offsets_resolve_like_css() {
    let g = GradientSpec::linear(LinearAxis::ToBottom, vec![black(1.0), black(0.5), black(0.0)]);
    assert_eq!(g.resolved_offsets(), vec![0.0, 0.5, 1.0]);

    let g = GradientSpec::linear(
        LinearAxis::ToBottom,
        vec![
            GradientStop::at(Rgb8::BLACK, 0.0, 0.2),
            GradientStop::at(Rgb8::BLACK, 0.2, 0.5),
            black(0.95),
        ],
    );
    assert_eq!(g.resolved_offsets(), vec![0.2, 0.5, 1.0]);
}

#[test]
fn offsets_never_decrease() {
    let g = GradientSpec::linear(
        LinearAxis::ToRight,
        vec![
            GradientStop::at(Rgb8::BLACK, 1.0, 0.6),
            GradientStop::at(Rgb8::BLACK, 0.0, 0.3),
        ],
    );
    assert_eq!(g.resolved_offsets(), vec![0.6, 0.6]);
}

#[test]
fn axis_vectors_point_away_from_origin_edge() {
    assert_eq!(LinearAxis::ToTop.unit_vector(), (0.0, 1.0, 0.0, 0.0));
    assert_eq!(LinearAxis::ToLeft.unit_vector(), (1.0, 0.0, 0.0, 0.0));
}
