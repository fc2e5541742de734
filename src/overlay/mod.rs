//! Overlay gradient model.
//!
//! Maps the overlay fields of [`EditorState`](crate::EditorState) (color, opacity, direction) to
//! a declarative [`GradientSpec`]. Templates reuse the same spec type for their own baseline
//! fades, so lowering to CSS or SVG has one code path.

/// Gradient specification shared by overlays and template fades.
pub mod gradient;
/// Preset/direction tables and the overlay builder.
pub mod model;
