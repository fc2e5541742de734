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
            BODY_PX, BadgeBox, FRAME_RADIUS, Fonts, GAP_SM, HEADLINE_PX, INSET, LEADING_RELAXED,
            LOGO_SM, PAD, SMALL_PX, badge, fill, hex, logo, overlay_or_fade, photo, square_at,
        },
    },
};

const BACKGROUND: Rgb8 = Rgb8::new(0x1a, 0x1a, 0x1a);
const FADE_START: f64 = 0.5;
const FADE_ALPHA: f64 = 0.35;
const BADGE_RADIUS: f64 = 4.0;

pub(crate) fn render(state: &EditorState) -> Composition {
    let canvas = Canvas::POST;
    let full = canvas.rect();
    let fonts = Fonts::of(state);
    let accent = hex(&state.accent_color);

    let mut comp = Composition::new(TemplateKind::NewsBanner, canvas);
    comp.corner_radius = FRAME_RADIUS;
    comp.push(fill(LayerRole::Background, full, BACKGROUND));
    comp.push_opt(photo(state, full, 1.0));

    let fade = GradientLayer {
        role: LayerRole::Fade,
        rect: Rect::new(0.0, full.height() * FADE_START, full.width(), full.height()),
        gradient: GradientSpec::linear(
            LinearAxis::ToTop,
            vec![
                GradientStop::new(Rgb8::BLACK, FADE_ALPHA),
                GradientStop::new(Rgb8::BLACK, 0.0),
            ],
        ),
    };
    comp.push_opt(overlay_or_fade(state, full, Some(fade)));

    badge(
        LayerRole::DateBadge,
        &state.date_badge,
        TextStyle::new(fonts.headline, SMALL_PX, Rgb8::WHITE)
            .weight(700)
            .tracking(0.025),
        Point::new(INSET, INSET),
        BadgeBox {
            pad_x: 25.0,
            pad_y: 13.0,
            color: accent,
            radius: BADGE_RADIUS,
        },
    )
    .push_into(&mut comp);

    comp.push_opt(logo(
        state,
        square_at(full.width() - INSET - LOGO_SM, INSET, LOGO_SM),
        ImageClip::Circle,
    ));

    let width = full.width() - 2.0 * PAD;
    let origin = Point::new(PAD, 0.0);
    let mut stack = BottomStack::new(full.height() - PAD);

    let body = stack.place(TextLayer::wrapped(
        LayerRole::Body,
        &state.body,
        TextStyle::new(fonts.body, BODY_PX, hex(&state.body_color))
            .line_height(LEADING_RELAXED)
            .opacity(0.9),
        origin,
        width,
    ));
    stack.gap(GAP_SM);

    let headline = stack.place(TextLayer::wrapped(
        LayerRole::Headline,
        &state.headline,
        TextStyle::new(fonts.headline, HEADLINE_PX, hex(&state.headline_color)).weight(700),
        origin,
        width,
    ));
    stack.gap(GAP_SM);

    let tag_style = TextStyle::new(fonts.footer, SMALL_PX, Rgb8::WHITE)
        .weight(700)
        .uppercase()
        .tracking(0.05);
    let tag_frame = BadgeBox {
        pad_x: GAP_SM,
        pad_y: 4.0,
        color: accent,
        radius: BADGE_RADIUS,
    };
    let tag_h = tag_style.line_px() + 2.0 * tag_frame.pad_y;
    let tag_top = stack.take(tag_h);
    badge(
        LayerRole::CategoryBadge,
        &state.footer,
        tag_style,
        Point::new(PAD, tag_top),
        tag_frame,
    )
    .push_into(&mut comp);

    comp.push(headline.into());
    comp.push(body.into());
    comp
}
