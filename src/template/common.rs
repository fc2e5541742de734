//! Shared geometry and layer builders for the templates.
//!
//! Sizes are in 1080px canvas units.

use crate::{
    editor::{font::resolve_font_stack, state::EditorState},
    foundation::{
        color::Rgb8,
        core::{Point, Rect},
    },
    overlay::model::{Overlay, build_overlay_gradient},
    scene::{
        Composition, FillLayer, GradientLayer, ImageClip, ImageFit, ImageLayer, Layer, LayerRole,
        TextLayer, TextStyle, layout::measure_line,
    },
};

pub(crate) const FRAME_RADIUS: f64 = 17.0;
pub(crate) const PAD: f64 = 50.0;
pub(crate) const INSET: f64 = 34.0;

pub(crate) const HEADLINE_PX: f64 = 50.0;
pub(crate) const HEADLINE_LG_PX: f64 = 42.0;
pub(crate) const BODY_PX: f64 = 30.0;
pub(crate) const BODY_LG_PX: f64 = 38.0;
pub(crate) const SMALL_PX: f64 = 25.0;

pub(crate) const GAP_SM: f64 = 17.0;
pub(crate) const GAP_MD: f64 = 25.0;

pub(crate) const LOGO_LG: f64 = 100.0;
pub(crate) const LOGO_SM: f64 = 84.0;

pub(crate) const LEADING_RELAXED: f64 = 1.625;

pub(crate) const PILL_RADIUS: f64 = 9999.0;

/// Font stacks resolved once per render.
pub(crate) struct Fonts {
    pub(crate) headline: &'static str,
    pub(crate) body: &'static str,
    pub(crate) footer: &'static str,
}

impl Fonts {
    pub(crate) fn of(state: &EditorState) -> Self {
        Self {
            headline: resolve_font_stack(&state.headline_font),
            body: resolve_font_stack(&state.body_font),
            footer: resolve_font_stack(&state.footer_font),
        }
    }
}

pub(crate) fn hex(s: &str) -> Rgb8 {
    Rgb8::from_hex_or_black(s)
}

pub(crate) fn fill(role: LayerRole, rect: Rect, color: Rgb8) -> Layer {
    Layer::Fill(FillLayer {
        role,
        rect,
        color,
        opacity: 1.0,
        corner_radius: 0.0,
    })
}

pub(crate) fn square_at(x: f64, y: f64, side: f64) -> Rect {
    Rect::from_origin_size((x, y), (side, side))
}

pub(crate) fn photo(state: &EditorState, rect: Rect, opacity: f64) -> Option<Layer> {
    state.photo.as_ref().map(|data| {
        Layer::Image(ImageLayer {
            role: LayerRole::Photo,
            rect,
            data: data.clone(),
            fit: ImageFit::Cover,
            clip: ImageClip::Rect,
            opacity,
        })
    })
}

pub(crate) fn logo(state: &EditorState, rect: Rect, clip: ImageClip) -> Option<Layer> {
    let fit = match clip {
        ImageClip::Circle => ImageFit::Cover,
        ImageClip::Rect => ImageFit::Contain,
    };
    state.logo.as_ref().map(|data| {
        Layer::Image(ImageLayer {
            role: LayerRole::Logo,
            rect,
            data: data.clone(),
            fit,
            clip,
            opacity: 1.0,
        })
    })
}

/// The state's overlay over `rect`, or the template's baseline `fade` when there is none.
pub(crate) fn overlay_or_fade(
    state: &EditorState,
    rect: Rect,
    fade: Option<GradientLayer>,
) -> Option<Layer> {
    match build_overlay_gradient(state) {
        Overlay::Gradient(gradient) => Some(Layer::Gradient(GradientLayer {
            role: LayerRole::Overlay,
            rect,
            gradient,
        })),
        Overlay::None => fade.map(Layer::Gradient),
    }
}

/// Single-line label on a filled rounded box.
pub(crate) struct Badge {
    pub(crate) fill: Layer,
    pub(crate) text: Layer,
    pub(crate) rect: Rect,
}

pub(crate) struct BadgeBox {
    pub(crate) pad_x: f64,
    pub(crate) pad_y: f64,
    pub(crate) color: Rgb8,
    pub(crate) radius: f64,
}

pub(crate) fn badge(
    role: LayerRole,
    text: &str,
    style: TextStyle,
    origin: Point,
    frame: BadgeBox,
) -> Badge {
    let w = measure_line(text, &style) + 2.0 * frame.pad_x;
    let h = style.line_px() + 2.0 * frame.pad_y;
    let rect = Rect::from_origin_size(origin, (w, h));
    let label = TextLayer::single_line(
        role,
        text,
        style,
        Point::new(origin.x + frame.pad_x, origin.y + frame.pad_y),
    );
    Badge {
        fill: Layer::Fill(FillLayer {
            role,
            rect,
            color: frame.color,
            opacity: 1.0,
            corner_radius: frame.radius,
        }),
        text: Layer::Text(label),
        rect,
    }
}

impl Badge {
    pub(crate) fn push_into(self, comp: &mut Composition) {
        comp.push(self.fill);
        comp.push(self.text);
    }
}
