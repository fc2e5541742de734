//! Rasterization of compositions.
//!
//! The default backend lowers a [`crate::scene::Composition`] to SVG and draws it with `resvg`.
//! Export only depends on the [`Rasterize`] trait, so tests can swap in their own backend.

pub mod fonts;
pub mod raster;

pub use raster::{MAX_DIM, RasterImage, Rasterize, SvgRasterizer};
