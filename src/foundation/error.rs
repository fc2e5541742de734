/// Convenience result type used across postframe.
pub type PostResult<T> = Result<T, PostError>;

/// Top-level error taxonomy used by editor, render and export APIs.
///
/// Rendering itself degrades instead of failing (bad colors become black, unknown ids fall back
/// to defaults), so most of these surface from the edges: reading inputs, decoding uploads and
/// writing the exported image.
#[derive(thiserror::Error, Debug)]
pub enum PostError {
    /// Invalid user-provided data at the control surface.
    #[error("validation error: {0}")]
    Validation(String),

    /// Uploaded or embedded image data could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Lowering or rasterizing a composition failed.
    #[error("render error: {0}")]
    Render(String),

    /// Producing the exported PNG failed.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing state documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PostError {
    /// Build a [`PostError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PostError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PostError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PostError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`PostError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PostError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
