use crate::{
    editor::state::EditorState,
    foundation::{
        color::Rgb8,
        core::{Canvas, Point, Rect},
    },
    scene::{
        Composition, ImageClip, LayerRole, TextAlign, TextLayer, TextStyle, layout::measure_line,
    },
    template::{
        TemplateKind,
        common::{
            BODY_LG_PX, FRAME_RADIUS, Fonts, GAP_SM, HEADLINE_LG_PX, INSET, LEADING_RELAXED,
            LOGO_SM, PAD, SMALL_PX, fill, hex, logo, overlay_or_fade, photo, square_at,
        },
    },
};

/// Body color used instead of white, which would vanish on the white lower panel.
pub const SPLIT_BODY_FALLBACK: &str = "#1a1a1a";

const PHOTO_SHARE: f64 = 0.6;
const FOOTER_GAP: f64 = 34.0;

pub(crate) fn render(state: &EditorState) -> Composition {
    let canvas = Canvas::POST;
    let full = canvas.rect();
    let fonts = Fonts::of(state);
    let accent = hex(&state.accent_color);
    let photo_area = Rect::new(0.0, 0.0, full.width(), full.height() * PHOTO_SHARE);

    let mut comp = Composition::new(TemplateKind::Split, canvas);
    comp.corner_radius = FRAME_RADIUS;
    comp.push(fill(LayerRole::Background, full, Rgb8::WHITE));
    comp.push_opt(photo(state, photo_area, 1.0));
    comp.push_opt(overlay_or_fade(state, photo_area, None));
    comp.push_opt(logo(state, square_at(INSET, INSET, LOGO_SM), ImageClip::Circle));

    // Headline lines sit on accent blocks at the bottom of the photo area.
    let block_pad = GAP_SM;
    let text_x = INSET + block_pad;
    let text_w = full.width() - 2.0 * text_x;
    let headline = TextLayer::wrapped(
        LayerRole::Headline,
        &state.headline,
        TextStyle::new(fonts.headline, HEADLINE_LG_PX, Rgb8::WHITE).weight(700),
        Point::new(text_x, 0.0),
        text_w,
    );
    let headline_h = headline.height();
    let headline = headline.with_top(photo_area.y1 - INSET - headline_h);
    let line_px = headline.style.line_px();
    for (i, line) in headline.lines.iter().enumerate() {
        let y0 = headline.rect.y0 + i as f64 * line_px;
        let w = measure_line(line, &headline.style);
        comp.push(fill(
            LayerRole::Headline,
            Rect::new(text_x - block_pad, y0, text_x + w + block_pad, y0 + line_px),
            accent,
        ));
    }
    comp.push(headline.into());

    let body_color = if Rgb8::parse_hex(&state.body_color) == Some(Rgb8::WHITE) {
        SPLIT_BODY_FALLBACK
    } else {
        state.body_color.as_str()
    };

    let panel = Rect::new(0.0, photo_area.y1, full.width(), full.height());
    let width = full.width() - 2.0 * PAD;
    let origin = Point::new(PAD, 0.0);
    let body = TextLayer::wrapped(
        LayerRole::Body,
        &state.body,
        TextStyle::new(fonts.body, BODY_LG_PX, hex(body_color))
            .weight(500)
            .line_height(LEADING_RELAXED)
            .align(TextAlign::Center),
        origin,
        width,
    );
    let footer = TextLayer::wrapped(
        LayerRole::Footer,
        &state.footer,
        TextStyle::new(fonts.footer, SMALL_PX, accent)
            .weight(700)
            .uppercase()
            .tracking(0.1)
            .align(TextAlign::Center),
        origin,
        width,
    );

    let total = body.height() + FOOTER_GAP + footer.height();
    let top = panel.y0 + (panel.height() - total) / 2.0;
    let body = body.with_top(top);
    let footer = footer.with_top(body.rect.y1 + FOOTER_GAP);

    comp.push(body.into());
    comp.push(footer.into());
    comp
}
