use std::{io::Cursor, path::Path, sync::Arc};

use crate::{
    foundation::error::{PostError, PostResult},
    render::fonts::{build_fontdb, font_resolver},
    scene::{Composition, svg::to_svg},
};

/// Largest accepted output side in pixels.
pub const MAX_DIM: u32 = 16_384;

/// A rasterized post as straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> PostResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| PostError::export("pixel buffer does not match image size"))?;
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| PostError::export(format!("png encode failed: {e}")))?;
        Ok(buf)
    }
}

/// Turns a composition into pixels at a device scale.
pub trait Rasterize {
    /// Rasterize `comp` at `scale` output pixels per canvas pixel.
    fn rasterize(&self, comp: &Composition, scale: f32) -> PostResult<RasterImage>;
}

/// `usvg`/`resvg` backend.
#[derive(Clone)]
pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRasterizer {
    /// Backend over system fonts.
    pub fn new() -> Self {
        Self::from_fontdb(build_fontdb(None))
    }

    /// Backend over system fonts plus the fonts in `dir`.
    pub fn with_fonts_dir(dir: &Path) -> Self {
        Self::from_fontdb(build_fontdb(Some(dir)))
    }

    /// Backend sharing an existing font database.
    pub fn from_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { fontdb }
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl Rasterize for SvgRasterizer {
    #[tracing::instrument(skip(self, comp), fields(template = comp.template.id()))]
    fn rasterize(&self, comp: &Composition, scale: f32) -> PostResult<RasterImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(PostError::validation(format!(
                "scale must be finite and > 0, got {scale}"
            )));
        }

        let (width, height) = comp.canvas.scaled(scale);
        if width > MAX_DIM || height > MAX_DIM {
            return Err(PostError::render(format!(
                "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }

        let svg = to_svg(comp);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| PostError::render(format!("composition svg rejected: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PostError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.take();
        unpremultiply_rgba8_in_place(&mut data);
        tracing::debug!(width, height, "rasterized");
        Ok(RasterImage {
            width,
            height,
            data,
        })
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
