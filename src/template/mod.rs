//! The four post templates.
//!
//! Every template is a pure function `&EditorState -> Composition` over the same state shape.
//! Selection goes through a static table keyed by the wire id; unknown ids render the
//! White-Gradient template.

mod common;
mod dark_bold;
mod news_banner;
mod split;
mod white_gradient;

use crate::{editor::state::EditorState, scene::Composition};

pub use split::SPLIT_BODY_FALLBACK;

/// Template identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Photo with a white fade and dark text at the bottom.
    #[default]
    WhiteGradient,
    /// Photo with a dark fade, date badge and category tag.
    NewsBanner,
    /// Photo on top, centered copy on white below.
    Split,
    /// Dimmed photo, badges and a bold accent-barred headline.
    DarkBold,
}

/// One row of the template table.
#[derive(Clone, Copy, Debug)]
pub struct TemplateDef {
    /// Kind.
    pub kind: TemplateKind,
    /// Stable wire id.
    pub id: &'static str,
    /// Control-surface label.
    pub label: &'static str,
    /// Renderer.
    pub render: fn(&EditorState) -> Composition,
}

/// All templates in control-surface order.
pub static TEMPLATES: [TemplateDef; 4] = [
    TemplateDef {
        kind: TemplateKind::WhiteGradient,
        id: "white-gradient",
        label: "White Gradient",
        render: white_gradient::render,
    },
    TemplateDef {
        kind: TemplateKind::NewsBanner,
        id: "news-banner",
        label: "News Banner",
        render: news_banner::render,
    },
    TemplateDef {
        kind: TemplateKind::Split,
        id: "split",
        label: "Split Layout",
        render: split::render,
    },
    TemplateDef {
        kind: TemplateKind::DarkBold,
        id: "dark-bold",
        label: "Dark Bold",
        render: dark_bold::render,
    },
];

impl TemplateKind {
    /// All kinds in control-surface order.
    pub const ALL: [TemplateKind; 4] = [
        Self::WhiteGradient,
        Self::NewsBanner,
        Self::Split,
        Self::DarkBold,
    ];

    /// Table row for this kind.
    pub fn def(self) -> &'static TemplateDef {
        match self {
            Self::WhiteGradient => &TEMPLATES[0],
            Self::NewsBanner => &TEMPLATES[1],
            Self::Split => &TEMPLATES[2],
            Self::DarkBold => &TEMPLATES[3],
        }
    }

    /// Stable wire id.
    pub fn id(self) -> &'static str {
        self.def().id
    }

    /// Control-surface label.
    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// Exact id lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        TEMPLATES.iter().find(|t| t.id == id).map(|t| t.kind)
    }

    /// Id lookup with the White-Gradient fallback.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!(id, "unknown template id, using white-gradient");
            Self::WhiteGradient
        })
    }
}

/// Render the template selected by `state.active_template`.
pub fn render_template(state: &EditorState) -> Composition {
    let kind = TemplateKind::resolve(&state.active_template);
    (kind.def().render)(state)
}

#[cfg(test)]
#[path = "../../tests/unit/template/mod.rs"]
mod tests;
