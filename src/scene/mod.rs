//! Backend-agnostic visual compositions.
//!
//! Templates produce a [`Composition`]: an ordered list of flat layers on a fixed canvas. The
//! composition is the capture target for export and is lowered to SVG by [`svg::to_svg`].

/// Approximate text measurement, wrapping and stacking.
pub mod layout;
/// Composition and layer types.
pub mod model;
/// Lowering to an SVG document.
pub mod svg;

pub use model::{
    Composition, FillLayer, GradientLayer, ImageClip, ImageFit, ImageLayer, Layer, LayerRole,
    TextAlign, TextLayer, TextStyle,
};
