//! PNG export of a rendered composition.

use std::path::{Path, PathBuf};

use crate::{
    foundation::{
        clock::Clock,
        error::{PostError, PostResult},
    },
    render::{Rasterize, SvgRasterizer},
    scene::Composition,
};

/// Device scale used for exports.
pub const EXPORT_SCALE: f32 = 2.0;

/// Export file name for the clock's current instant: `post-<unix-ms>.png`.
pub fn export_file_name(clock: &dyn Clock) -> String {
    format!("post-{}.png", clock.now().timestamp_millis())
}

/// An encoded export, not yet written anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// Suggested file name.
    pub file_name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write into `dir` under [`ExportedImage::file_name`], creating `dir` if needed.
    pub fn write_to_dir(&self, dir: &Path) -> PostResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            PostError::export(format!("create output dir '{}': {e}", dir.display()))
        })?;
        let path = dir.join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write to exactly `path`.
    pub fn write_to(&self, path: &Path) -> PostResult<()> {
        std::fs::write(path, &self.png)
            .map_err(|e| PostError::export(format!("write png '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = self.png.len(), "export written");
        Ok(())
    }
}

impl std::fmt::Debug for ExportedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedImage")
            .field("file_name", &self.file_name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("png_len", &self.png.len())
            .finish()
    }
}

/// Rasterizes compositions and encodes them as PNG.
///
/// Export only reads the composition it is given. A failure is reported as a single
/// [`PostError::Export`] and leaves nothing behind, so calling [`Exporter::export`] again is a
/// full retry.
#[derive(Debug)]
pub struct Exporter<R = SvgRasterizer> {
    rasterizer: R,
    scale: f32,
}

impl Default for Exporter<SvgRasterizer> {
    fn default() -> Self {
        Self::new(SvgRasterizer::default())
    }
}

impl<R: Rasterize> Exporter<R> {
    /// Exporter at [`EXPORT_SCALE`].
    pub fn new(rasterizer: R) -> Self {
        Self {
            rasterizer,
            scale: EXPORT_SCALE,
        }
    }

    /// Same exporter at another device scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Device scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Backend.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Rasterize and encode `comp`, naming the result after `clock`.
    #[tracing::instrument(skip(self, comp, clock), fields(template = comp.template.id(), scale = self.scale))]
    pub fn export(&self, comp: &Composition, clock: &dyn Clock) -> PostResult<ExportedImage> {
        let file_name = export_file_name(clock);

        let encoded = self
            .rasterizer
            .rasterize(comp, self.scale)
            .and_then(|img| img.encode_png().map(|png| (img.width, img.height, png)));

        let (width, height, png) = match encoded {
            Ok(v) => v,
            Err(PostError::Export(msg)) => return Err(PostError::Export(msg)),
            Err(other) => {
                tracing::warn!(%other, "export failed");
                return Err(PostError::export(format!("{file_name}: {other}")));
            }
        };

        tracing::debug!(%file_name, width, height, bytes = png.len(), "exported");
        Ok(ExportedImage {
            file_name,
            width,
            height,
            png,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
