use std::cell::Cell;

use super::*;
use crate::{
    editor::{patch::EditorPatch, store::EditorStore},
    foundation::clock::FixedClock,
    render::RasterImage,
};

const NOW_MS: i64 = 1_792_366_200_000;

/// Fails until `fail` is cleared; paints a flat transparent image otherwise.
struct FlakyRasterizer {
    fail: Cell<bool>,
    calls: Cell<u32>,
}

impl FlakyRasterizer {
    fn failing() -> Self {
        Self {
            fail: Cell::new(true),
            calls: Cell::new(0),
        }
    }
}

impl Rasterize for FlakyRasterizer {
    fn rasterize(&self, comp: &Composition, scale: f32) -> PostResult<RasterImage> {
        self.calls.set(self.calls.get() + 1);
        if self.fail.get() {
            return Err(PostError::render("backend unavailable"));
        }
        let (width, height) = comp.canvas.scaled(scale);
        Ok(RasterImage {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        })
    }
}

fn store() -> EditorStore {
    EditorStore::with_clock(&FixedClock::from_unix_millis(NOW_MS))
}

#[test]
fn file_name_is_post_and_unix_millis() {
    let clock = FixedClock::from_unix_millis(NOW_MS);
    assert_eq!(export_file_name(&clock), "post-1792366200000.png");
}

#[test]
fn export_is_twice_the_canvas() {
    let exporter = Exporter::new(FlakyRasterizer::failing());
    exporter.rasterizer().fail.set(false);
    let out = exporter
        .export(&store().preview(), &FixedClock::from_unix_millis(NOW_MS))
        .unwrap();
    assert_eq!((out.width, out.height), (2160, 2160));
    assert_eq!(out.file_name, "post-1792366200000.png");
    assert_eq!(&out.png[..4], b"\x89PNG");
}

#[test]
fn failure_is_one_export_error_and_retry_works() {
    let mut store = store();
    store.apply(&EditorPatch {
        headline: Some("Keep me".to_owned()),
        ..EditorPatch::default()
    });
    let before = store.state().clone();
    let revision = store.revision();
    let clock = FixedClock::from_unix_millis(NOW_MS);

    let exporter = Exporter::new(FlakyRasterizer::failing());
    let err = exporter.export(&store.preview(), &clock).unwrap_err();
    match err {
        PostError::Export(msg) => assert!(msg.contains("backend unavailable"), "{msg}"),
        other => panic!("expected export error, got {other:?}"),
    }
    assert_eq!(store.state(), &before);
    assert_eq!(store.revision(), revision);

    exporter.rasterizer().fail.set(false);
    let out = exporter.export(&store.preview(), &clock).unwrap();
    assert_eq!(out.width, 2160);
    assert_eq!(exporter.rasterizer().calls.get(), 2);
}

#[test]
fn snapshot_is_unaffected_by_later_patches() {
    let mut store = store();
    let snapshot = store.preview();
    store.apply(&EditorPatch {
        active_template: Some("split".to_owned()),
        ..EditorPatch::default()
    });
    assert_eq!(snapshot.template.id(), "white-gradient");
    assert_eq!(store.preview().template.id(), "split");
}

#[test]
fn custom_scale_is_respected() {
    let exporter = Exporter::new(FlakyRasterizer::failing()).with_scale(1.0);
    exporter.rasterizer().fail.set(false);
    let out = exporter
        .export(&store().preview(), &FixedClock::from_unix_millis(NOW_MS))
        .unwrap();
    assert_eq!(out.width, 1080);
    assert_eq!(exporter.scale(), 1.0);
}

#[test]
fn write_to_dir_uses_the_file_name() {
    let dir = std::env::temp_dir().join(format!("postframe-export-{}", std::process::id()));
    let image = ExportedImage {
        file_name: "post-1.png".to_owned(),
        width: 1,
        height: 1,
        png: vec![1, 2, 3],
    };
    let path = image.write_to_dir(&dir).unwrap();
    assert_eq!(path, dir.join("post-1.png"));
    assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_target_is_an_export_error() {
    let image = ExportedImage {
        file_name: "post-1.png".to_owned(),
        width: 1,
        height: 1,
        png: vec![],
    };
    let missing = std::env::temp_dir()
        .join(format!("postframe-missing-{}", std::process::id()))
        .join("nested")
        .join("post.png");
    assert!(matches!(image.write_to(&missing), Err(PostError::Export(_))));
}
