//! Editor state, patches and the store that owns them.

/// Patch-producing control events (the control panel contract).
pub mod control;
/// The six selectable font descriptors.
pub mod font;
/// Self-contained image references (data URIs).
pub mod media;
/// Partial updates and the pure merge function.
pub mod patch;
/// The editable state record.
pub mod state;
/// The single owner of editor state.
pub mod store;
/// Two-step upload encoding.
pub mod upload;
