use std::{
    path::PathBuf,
    thread::{self, JoinHandle},
};

use anyhow::Context as _;

use crate::{
    editor::{
        control::{ControlEvent, ImageSlot},
        media::ImageData,
        patch::EditorPatch,
    },
    foundation::error::{PostError, PostResult},
};

/// An upload whose encoding is still running.
///
/// Produced by [`submit_upload`]/[`submit_upload_file`]; resolve it with
/// [`PendingUpload::wait`] and hand the resulting patch to the store like any other edit.
#[derive(Debug)]
pub struct PendingUpload {
    slot: ImageSlot,
    handle: JoinHandle<PostResult<ImageData>>,
}

/// Start encoding in-memory image bytes for `slot`.
pub fn submit_upload(slot: ImageSlot, bytes: Vec<u8>) -> PostResult<PendingUpload> {
    spawn(slot, move || ImageData::encode(&bytes))
}

/// Start reading and encoding the image file at `path` for `slot`.
pub fn submit_upload_file(slot: ImageSlot, path: impl Into<PathBuf>) -> PostResult<PendingUpload> {
    let path = path.into();
    spawn(slot, move || {
        let bytes =
            std::fs::read(&path).with_context(|| format!("read upload '{}'", path.display()))?;
        ImageData::encode(&bytes)
    })
}

fn spawn(
    slot: ImageSlot,
    job: impl FnOnce() -> PostResult<ImageData> + Send + 'static,
) -> PostResult<PendingUpload> {
    let handle = thread::Builder::new()
        .name("postframe-upload".to_owned())
        .spawn(job)
        .context("spawn upload encoder thread")?;
    tracing::debug!(?slot, "upload submitted");
    Ok(PendingUpload { slot, handle })
}

impl PendingUpload {
    /// Destination slot.
    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    /// Whether encoding has finished (successfully or not).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until encoding completes and return the `{photo}`/`{logo}` patch.
    pub fn wait(self) -> PostResult<EditorPatch> {
        let data = self
            .handle
            .join()
            .map_err(|_| PostError::decode("upload encoder thread panicked"))??;
        Ok(ControlEvent::ImageLoaded {
            slot: self.slot,
            data,
        }
        .into_patch())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/upload.rs"]
mod tests;
