use crate::{
    editor::{font::FontFamily, media::ImageData, patch::EditorPatch},
    foundation::core::clamp_unit,
    overlay::model::{CUSTOM_STYLE_ID, OverlayDirection, OverlayPreset},
    template::TemplateKind,
};

/// Editable text fields, each with its own color and font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Headline.
    Headline,
    /// Body copy.
    Body,
    /// Footer/brand line.
    Footer,
}

/// Color pickers on the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorField {
    /// Headline color.
    Headline,
    /// Body color.
    Body,
    /// Footer color.
    Footer,
    /// Accent color.
    Accent,
}

/// Image slots that accept uploads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Background photo.
    Photo,
    /// Brand logo.
    Logo,
}

/// One user input on the control surface.
///
/// Every event maps to exactly one [`EditorPatch`]; the store never sees events, only patches.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    /// Switch the active template.
    SelectTemplate(TemplateKind),
    /// Replace a text field.
    EditText {
        /// Field being edited.
        field: TextField,
        /// New text, verbatim.
        value: String,
    },
    /// Pick a text or accent color.
    PickColor {
        /// Color slot.
        field: ColorField,
        /// New color; passed through unvalidated.
        value: String,
    },
    /// Pick the font of a text field.
    PickFont {
        /// Field whose font changes.
        field: TextField,
        /// Selected font.
        font: FontFamily,
    },
    /// Move the opacity slider. Clamped to `[0, 1]`; marks the overlay style as custom.
    SetOverlayOpacity(f64),
    /// Choose the overlay direction.
    SetOverlayDirection(&'static OverlayDirection),
    /// Pick a custom overlay color; marks the overlay style as custom.
    PickOverlayColor(String),
    /// Apply an overlay preset (color, opacity and style together).
    ApplyPreset(&'static OverlayPreset),
    /// Replace the date badge text.
    EditDateBadge(String),
    /// An upload finished encoding.
    ImageLoaded {
        /// Destination slot.
        slot: ImageSlot,
        /// Encoded image.
        data: ImageData,
    },
    /// Remove the image in a slot.
    ClearImage(ImageSlot),
}

impl ControlEvent {
    /// Translate the event into the patch the store applies.
    pub fn into_patch(self) -> EditorPatch {
        let mut p = EditorPatch::default();
        match self {
            Self::SelectTemplate(kind) => p.active_template = Some(kind.id().to_owned()),
            Self::EditText { field, value } => match field {
                TextField::Headline => p.headline = Some(value),
                TextField::Body => p.body = Some(value),
                TextField::Footer => p.footer = Some(value),
            },
            Self::PickColor { field, value } => match field {
                ColorField::Headline => p.headline_color = Some(value),
                ColorField::Body => p.body_color = Some(value),
                ColorField::Footer => p.footer_color = Some(value),
                ColorField::Accent => p.accent_color = Some(value),
            },
            Self::PickFont { field, font } => {
                let descriptor = Some(font.descriptor().to_owned());
                match field {
                    TextField::Headline => p.headline_font = descriptor,
                    TextField::Body => p.body_font = descriptor,
                    TextField::Footer => p.footer_font = descriptor,
                }
            }
            Self::SetOverlayOpacity(v) => {
                p.overlay_opacity = Some(clamp_unit(v));
                p.overlay_style = Some(CUSTOM_STYLE_ID.to_owned());
            }
            Self::SetOverlayDirection(dir) => p.overlay_direction = Some(dir.id.to_owned()),
            Self::PickOverlayColor(color) => {
                p.overlay_color = Some(color);
                p.overlay_style = Some(CUSTOM_STYLE_ID.to_owned());
            }
            Self::ApplyPreset(preset) => p = EditorPatch::from_preset(preset),
            Self::EditDateBadge(text) => p.date_badge = Some(text),
            Self::ImageLoaded { slot, data } => match slot {
                ImageSlot::Photo => p.photo = Some(Some(data)),
                ImageSlot::Logo => p.logo = Some(Some(data)),
            },
            Self::ClearImage(slot) => match slot {
                ImageSlot::Photo => p.photo = Some(None),
                ImageSlot::Logo => p.logo = Some(None),
            },
        }
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/control.rs"]
mod tests;
