use std::{path::Path, sync::Arc};

use usvg::fontdb;

/// Font database with system fonts plus every font file found in `fonts_dir` (if given).
///
/// The editor's display faces (Oswald, Bebas Neue, ...) are rarely installed system-wide; point
/// `fonts_dir` at a directory holding them to get faithful output.
pub fn build_fontdb(fonts_dir: Option<&Path>) -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = fonts_dir {
        let loaded = load_fonts_from_dir(&mut db, dir);
        tracing::debug!(dir = %dir.display(), loaded, "loaded fonts");
    }

    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

/// Load `.ttf`/`.otf`/`.ttc` files directly inside `dir`; unreadable entries are skipped.
pub fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) -> usize {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "fonts directory is not readable");
        return 0;
    };

    let mut loaded = 0;
    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_font = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
        if !is_font {
            continue;
        }
        match db.load_font_file(&path) {
            Ok(()) => loaded += 1,
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping font file"),
        }
    }
    loaded
}

/// Resolver that walks the requested family stack, then generic families, then any face.
///
/// Text never disappears because a display face is missing; it falls back to whatever the
/// database has.
pub(crate) fn font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, db| {
            let mut families: Vec<fontdb::Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => fontdb::Family::Monospace,
                    usvg::FontFamily::Named(name) => fontdb::Family::Name(name),
                })
                .collect();
            families.push(fontdb::Family::SansSerif);
            families.push(fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => fontdb::Style::Normal,
                usvg::FontStyle::Italic => fontdb::Style::Italic,
                usvg::FontStyle::Oblique => fontdb::Style::Oblique,
            };

            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight()),
                stretch: fontdb::Stretch::Normal,
                style,
            };

            db.query(&query).or_else(|| db.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}
