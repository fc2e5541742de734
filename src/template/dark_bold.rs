use crate::{
    editor::state::EditorState,
    foundation::{
        color::Rgb8,
        core::{Canvas, Point, Rect},
    },
    overlay::gradient::{GradientSpec, GradientStop, LinearAxis},
    scene::{
        Composition, GradientLayer, ImageClip, LayerRole, TextLayer, TextStyle,
        layout::{BottomStack, measure_line},
    },
    template::{
        TemplateKind,
        common::{
            BODY_PX, BadgeBox, FRAME_RADIUS, Fonts, GAP_MD, GAP_SM, HEADLINE_PX, INSET,
            LEADING_RELAXED, LOGO_LG, PAD, PILL_RADIUS, SMALL_PX, badge, fill, hex, logo,
            overlay_or_fade, photo, square_at,
        },
    },
};

const BACKGROUND: Rgb8 = Rgb8::new(0x0a, 0x0a, 0x0a);
const PHOTO_OPACITY: f64 = 0.5;
const BAR_WIDTH: f64 = 8.0;
const BADGE_RADIUS: f64 = 4.0;

/// Label of the second top badge.
pub(crate) const BREAKING_LABEL: &str = "Breaking News";
/// Call-to-action text in the footer row.
pub(crate) const SWIPE_LABEL: &str = "SWIPE ➤";

fn date_badge_color() -> Rgb8 {
    Rgb8::from_hsl(190.0, 1.0, 0.5)
}

pub(crate) fn render(state: &EditorState) -> Composition {
    let canvas = Canvas::POST;
    let full = canvas.rect();
    let fonts = Fonts::of(state);
    let accent = hex(&state.accent_color);

    let mut comp = Composition::new(TemplateKind::DarkBold, canvas);
    comp.corner_radius = FRAME_RADIUS;
    comp.push(fill(LayerRole::Background, full, BACKGROUND));
    comp.push_opt(photo(state, full, PHOTO_OPACITY));

    let fade = GradientLayer {
        role: LayerRole::Fade,
        rect: full,
        gradient: GradientSpec::linear(
            LinearAxis::ToBottom,
            vec![
                GradientStop::at(Rgb8::BLACK, 0.0, 0.2),
                GradientStop::at(Rgb8::BLACK, 0.2, 0.5),
                GradientStop::at(Rgb8::BLACK, 0.95, 1.0),
            ],
        ),
    };
    comp.push_opt(overlay_or_fade(state, full, Some(fade)));
    comp.push_opt(logo(
        state,
        square_at(full.width() - INSET - LOGO_LG, INSET, LOGO_LG),
        ImageClip::Rect,
    ));

    let badge_style = |color| {
        TextStyle::new(fonts.footer, SMALL_PX, color)
            .weight(700)
            .uppercase()
            .tracking(0.05)
    };
    let badge_frame = |color| BadgeBox {
        pad_x: GAP_MD,
        pad_y: 8.0,
        color,
        radius: BADGE_RADIUS,
    };

    let date = badge(
        LayerRole::DateBadge,
        &state.date_badge,
        badge_style(Rgb8::BLACK),
        Point::new(INSET, INSET),
        badge_frame(date_badge_color()),
    );
    let next_x = date.rect.x1 + GAP_MD;
    date.push_into(&mut comp);
    badge(
        LayerRole::CategoryBadge,
        BREAKING_LABEL,
        badge_style(Rgb8::WHITE),
        Point::new(next_x, INSET),
        badge_frame(accent),
    )
    .push_into(&mut comp);

    // Footer row: handle on the left, swipe pill on the right, sharing one band.
    let handle_style = TextStyle::new(fonts.footer, SMALL_PX, hex(&state.footer_color))
        .weight(700)
        .tracking(0.1);
    let pill_style = TextStyle::new(fonts.footer, SMALL_PX, Rgb8::WHITE).weight(700);
    let pill_frame = BadgeBox {
        pad_x: GAP_MD,
        pad_y: 8.0,
        color: accent,
        radius: PILL_RADIUS,
    };
    let row_h = (pill_style.line_px() + 2.0 * pill_frame.pad_y).max(handle_style.line_px());
    let mut stack = BottomStack::new(full.height() - PAD);
    let row_top = stack.take(row_h);

    let handle = TextLayer::single_line(
        LayerRole::Footer,
        &format!("@{}", state.footer),
        handle_style,
        Point::new(PAD, 0.0),
    );
    let handle_h = handle.height();
    let handle = handle.with_top(row_top + (row_h - handle_h) / 2.0);

    let pill_w = measure_line(SWIPE_LABEL, &pill_style) + 2.0 * pill_frame.pad_x;
    let pill = badge(
        LayerRole::CallToAction,
        SWIPE_LABEL,
        pill_style,
        Point::new(full.width() - PAD - pill_w, row_top),
        pill_frame,
    );
    stack.gap(GAP_MD + GAP_SM);

    let text_x = PAD + BAR_WIDTH + GAP_MD;
    let width = full.width() - PAD - text_x;
    let origin = Point::new(text_x, 0.0);

    let body = stack.place(TextLayer::wrapped(
        LayerRole::Body,
        &state.body,
        TextStyle::new(fonts.body, BODY_PX, hex(&state.body_color))
            .line_height(LEADING_RELAXED)
            .opacity(0.9),
        origin,
        width,
    ));
    stack.gap(8.0);
    let headline = stack.place(TextLayer::wrapped(
        LayerRole::Headline,
        &state.headline,
        TextStyle::new(fonts.headline, HEADLINE_PX, hex(&state.headline_color))
            .weight(900)
            .uppercase(),
        origin,
        width,
    ));

    comp.push(fill(
        LayerRole::Accent,
        Rect::new(PAD, headline.rect.y0, PAD + BAR_WIDTH, body.rect.y1),
        accent,
    ));
    comp.push(headline.into());
    comp.push(body.into());
    comp.push(handle.into());
    pill.push_into(&mut comp);
    comp
}
