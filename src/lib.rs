//! Postframe is the core of a square social-media post editor.
//!
//! One [`EditorState`] record drives four layout templates. Every edit is an [`EditorPatch`]
//! merged into the state by [`apply_patch`]; the active template turns the state into a
//! [`Composition`], and export rasterizes that composition into a 2x PNG.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: [`ControlEvent`] (or an upload) `->` [`EditorPatch`] `->` [`EditorStore::apply`]
//! 2. **Overlay**: [`build_overlay_gradient`] maps overlay color/opacity/direction to a gradient
//! 3. **Template**: [`render_template`] lays the state out as flat layers on a 1080x1080 canvas
//! 4. **Export**: [`Exporter`] lowers the composition to SVG ([`to_svg`]), rasterizes it with
//!    `resvg` and encodes `post-<unix-ms>.png`
//!
//! Rendering never fails on bad input: unparseable colors render black, unknown ids fall back,
//! missing images are simply left out. Only export can fail, with one [`PostError::Export`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod editor;
mod export;
mod foundation;
mod overlay;
mod render;
mod scene;
mod template;

pub use editor::control::{ColorField, ControlEvent, ImageSlot, TextField};
pub use editor::font::{FALLBACK_FONT_STACK, FontFamily, resolve_font_stack};
pub use editor::media::ImageData;
pub use editor::patch::{EditorPatch, apply_patch};
pub use editor::state::{DEFAULT_BODY, DEFAULT_FOOTER, DEFAULT_HEADLINE, EditorState};
pub use editor::store::EditorStore;
pub use editor::upload::{PendingUpload, submit_upload, submit_upload_file};
pub use export::{EXPORT_SCALE, ExportedImage, Exporter, export_file_name};
pub use foundation::clock::{Clock, FixedClock, SystemClock, format_badge_date};
pub use foundation::color::Rgb8;
pub use foundation::core::{Canvas, Point, Rect, Size, clamp_unit};
pub use foundation::error::{PostError, PostResult};
pub use overlay::gradient::{GradientShape, GradientSpec, GradientStop, LinearAxis};
pub use overlay::model::{
    CUSTOM_STYLE_ID, DirectionAxis, OVERLAY_DIRECTIONS, OVERLAY_PRESETS, Overlay,
    OverlayDirection, OverlayPreset, RADIAL_DIRECTION_ID, RADIAL_INNER_STOP,
    build_overlay_gradient, linear_axis_for,
};
pub use render::fonts::{build_fontdb, load_fonts_from_dir};
pub use render::{MAX_DIM, RasterImage, Rasterize, SvgRasterizer};
pub use scene::layout::{BottomStack, measure_line, wrap_text};
pub use scene::svg::to_svg;
pub use scene::{
    Composition, FillLayer, GradientLayer, ImageClip, ImageFit, ImageLayer, Layer, LayerRole,
    TextAlign, TextLayer, TextStyle,
};
pub use template::{
    SPLIT_BODY_FALLBACK, TEMPLATES, TemplateDef, TemplateKind, render_template,
};
