use std::{fmt, io::Cursor};

use anyhow::Context as _;
use base64::{Engine, engine::general_purpose};

use crate::foundation::error::{PostError, PostResult};

/// A self-contained encoded image, stored as a `data:` URI.
///
/// Editor state never holds file handles or paths; uploads are encoded into this form before
/// they reach the store.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Wrap an existing data URI. No validation happens here; a broken payload only means the
    /// layer will not show up in the raster.
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Encode raw image file bytes.
    ///
    /// The bytes must decode with `image`. PNG, JPEG, GIF and WebP are embedded unchanged; any
    /// other decodable format is re-encoded as PNG so the rasterizer can read it.
    pub fn encode(bytes: &[u8]) -> PostResult<Self> {
        let format = image::guess_format(bytes)
            .map_err(|e| PostError::decode(format!("unrecognized image format: {e}")))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| PostError::decode(format!("decode {format:?} image: {e}")))?;

        let (mime, payload) = match format {
            image::ImageFormat::Png
            | image::ImageFormat::Jpeg
            | image::ImageFormat::Gif
            | image::ImageFormat::WebP => (format.to_mime_type(), bytes.to_vec()),
            _ => {
                let mut buf = Vec::new();
                decoded
                    .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                    .context("re-encode upload as png")?;
                ("image/png", buf)
            }
        };

        tracing::debug!(
            ?format,
            width = decoded.width(),
            height = decoded.height(),
            bytes = payload.len(),
            "encoded image upload"
        );
        Ok(Self(format!(
            "data:{mime};base64,{}",
            general_purpose::STANDARD.encode(payload)
        )))
    }

    /// The full URI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type from the URI header, if it has one.
    pub fn mime(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split_once(',')?.0;
        let mime = header.split(';').next()?;
        (!mime.is_empty()).then_some(mime)
    }

    /// Decode the payload bytes. Only base64 payloads are supported.
    pub fn decode_payload(&self) -> PostResult<Vec<u8>> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| PostError::decode("image reference is not a data URI"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| PostError::decode("data URI has no payload separator"))?;
        if !header.ends_with(";base64") {
            return Err(PostError::decode("data URI payload is not base64"));
        }
        general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| PostError::decode(format!("invalid base64 payload: {e}")))
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("mime", &self.mime())
            .field("len", &self.0.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/media.rs"]
mod tests;
