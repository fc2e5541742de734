use crate::{
    editor::state::EditorState,
    foundation::{
        color::Rgb8,
        core::{Canvas, Point, Rect},
    },
    overlay::gradient::{GradientSpec, GradientStop, LinearAxis},
    scene::{
        Composition, GradientLayer, ImageClip, LayerRole, TextLayer, TextStyle,
        layout::BottomStack,
    },
    template::{
        TemplateKind,
        common::{
            BODY_PX, FRAME_RADIUS, Fonts, GAP_SM, HEADLINE_PX, INSET, LEADING_RELAXED, LOGO_LG,
            PAD, SMALL_PX, fill, hex, logo, overlay_or_fade, photo, square_at,
        },
    },
};

const BACKGROUND: Rgb8 = Rgb8::new(0xf0, 0xf0, 0xf0);
const FADE_START: f64 = 0.45;
const FADE_ALPHA: f64 = 0.3;
const ACCENT_LINE: (f64, f64) = (135.0, 8.0);

pub(crate) fn render(state: &EditorState) -> Composition {
    let canvas = Canvas::POST;
    let full = canvas.rect();
    let fonts = Fonts::of(state);

    let mut comp = Composition::new(TemplateKind::WhiteGradient, canvas);
    comp.corner_radius = FRAME_RADIUS;
    comp.push(fill(LayerRole::Background, full, BACKGROUND));
    comp.push_opt(photo(state, full, 1.0));

    let fade = GradientLayer {
        role: LayerRole::Fade,
        rect: Rect::new(0.0, full.height() * FADE_START, full.width(), full.height()),
        gradient: GradientSpec::linear(
            LinearAxis::ToTop,
            vec![
                GradientStop::new(Rgb8::WHITE, FADE_ALPHA),
                GradientStop::new(Rgb8::WHITE, 0.0),
            ],
        ),
    };
    comp.push_opt(overlay_or_fade(state, full, Some(fade)));
    comp.push_opt(logo(state, square_at(INSET, INSET, LOGO_LG), ImageClip::Circle));

    let width = full.width() - 2.0 * PAD;
    let origin = Point::new(PAD, 0.0);
    let mut stack = BottomStack::new(full.height() - PAD);

    let footer = stack.place(TextLayer::wrapped(
        LayerRole::Footer,
        &state.footer,
        TextStyle::new(fonts.footer, SMALL_PX, hex(&state.footer_color))
            .weight(600)
            .uppercase()
            .tracking(0.1)
            .opacity(0.7),
        origin,
        width,
    ));
    stack.gap(2.0 * GAP_SM);

    let body = stack.place(TextLayer::wrapped(
        LayerRole::Body,
        &state.body,
        TextStyle::new(fonts.body, BODY_PX, hex(&state.body_color)).line_height(LEADING_RELAXED),
        origin,
        width,
    ));
    stack.gap(GAP_SM);

    let headline = stack.place(TextLayer::wrapped(
        LayerRole::Headline,
        &state.headline,
        TextStyle::new(fonts.headline, HEADLINE_PX, hex(&state.headline_color))
            .weight(700)
            .uppercase(),
        origin,
        width,
    ));
    stack.gap(GAP_SM);

    let (line_w, line_h) = ACCENT_LINE;
    let top = stack.take(line_h);
    comp.push(fill(
        LayerRole::Accent,
        Rect::new(PAD, top, PAD + line_w, top + line_h),
        hex(&state.accent_color),
    ));

    comp.push(headline.into());
    comp.push(body.into());
    comp.push(footer.into());
    comp
}
