use crate::{
    editor::{font::FontFamily, media::ImageData},
    foundation::clock::{Clock, format_badge_date},
};

/// Default headline text.
pub const DEFAULT_HEADLINE: &str = "Your Headline Here";
/// Default body text.
pub const DEFAULT_BODY: &str = "Add your body text here. This will appear below the headline.";
/// Default footer/brand text.
pub const DEFAULT_FOOTER: &str = "YOUR BRAND";

/// The single editable record behind every template.
///
/// Enumerated values (template, direction, overlay style, fonts) are stored as their wire
/// strings, and colors as hex strings. Nothing here is validated: templates and the overlay
/// model resolve and degrade values where they are used.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Background photo.
    pub photo: Option<ImageData>,
    /// Brand logo.
    pub logo: Option<ImageData>,
    /// Headline text.
    pub headline: String,
    /// Headline color (`#RRGGBB`).
    pub headline_color: String,
    /// Headline font descriptor.
    pub headline_font: String,
    /// Body text.
    pub body: String,
    /// Body color (`#RRGGBB`).
    pub body_color: String,
    /// Body font descriptor.
    pub body_font: String,
    /// Footer/brand text.
    pub footer: String,
    /// Footer color (`#RRGGBB`).
    pub footer_color: String,
    /// Footer font descriptor.
    pub footer_font: String,
    /// Accent color (`#RRGGBB`) for bars, badges and tags.
    pub accent_color: String,
    /// Overlay color (`#RRGGBB`).
    pub overlay_color: String,
    /// Overlay opacity, `0` meaning no overlay.
    pub overlay_opacity: f64,
    /// Overlay direction id.
    pub overlay_direction: String,
    /// Overlay preset id or `custom`.
    pub overlay_style: String,
    /// Date badge text.
    pub date_badge: String,
    /// Active template id.
    pub active_template: String,
}

impl EditorState {
    /// Session defaults; the date badge is today's date according to `clock`, fixed from here
    /// on.
    pub fn new(clock: &dyn Clock) -> Self {
        Self::with_date_badge(format_badge_date(clock.today()))
    }

    /// Session defaults with an explicit date badge.
    pub fn with_date_badge(date_badge: impl Into<String>) -> Self {
        Self {
            photo: None,
            logo: None,
            headline: DEFAULT_HEADLINE.to_owned(),
            headline_color: "#1a1a1a".to_owned(),
            headline_font: FontFamily::Oswald.descriptor().to_owned(),
            body: DEFAULT_BODY.to_owned(),
            body_color: "#333333".to_owned(),
            body_font: FontFamily::Roboto.descriptor().to_owned(),
            footer: DEFAULT_FOOTER.to_owned(),
            footer_color: "#666666".to_owned(),
            footer_font: FontFamily::Montserrat.descriptor().to_owned(),
            accent_color: "#DC2626".to_owned(),
            overlay_color: "#000000".to_owned(),
            overlay_opacity: 0.0,
            overlay_direction: "bottom".to_owned(),
            overlay_style: "none".to_owned(),
            date_badge: date_badge.into(),
            active_template: "white-gradient".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
