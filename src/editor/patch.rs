use serde::{Deserialize, Deserializer};

use crate::{
    editor::{media::ImageData, state::EditorState},
    overlay::model::OverlayPreset,
};

/// A partial update to [`EditorState`].
///
/// Every `Some` field replaces the whole field; `None` leaves it alone. For the nullable image
/// fields the outer option says "touch this field" and the inner one is the new value, so a
/// patch can clear a photo with `Some(None)`.
///
/// In JSON (camelCase keys, like the state) an absent key leaves the field unchanged and an
/// explicit `null` on `photo`/`logo` clears it. Unknown keys are rejected.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EditorPatch {
    /// Replacement for [`EditorState::photo`].
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<Option<ImageData>>,
    /// Replacement for [`EditorState::logo`].
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<Option<ImageData>>,
    /// Replacement for [`EditorState::headline`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Replacement for [`EditorState::headline_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_color: Option<String>,
    /// Replacement for [`EditorState::headline_font`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_font: Option<String>,
    /// Replacement for [`EditorState::body`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Replacement for [`EditorState::body_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_color: Option<String>,
    /// Replacement for [`EditorState::body_font`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    /// Replacement for [`EditorState::footer`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Replacement for [`EditorState::footer_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_color: Option<String>,
    /// Replacement for [`EditorState::footer_font`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font: Option<String>,
    /// Replacement for [`EditorState::accent_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    /// Replacement for [`EditorState::overlay_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
    /// Replacement for [`EditorState::overlay_opacity`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f64>,
    /// Replacement for [`EditorState::overlay_direction`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_direction: Option<String>,
    /// Replacement for [`EditorState::overlay_style`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_style: Option<String>,
    /// Replacement for [`EditorState::date_badge`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_badge: Option<String>,
    /// Replacement for [`EditorState::active_template`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_template: Option<String>,
}

fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl EditorPatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that sets overlay color, opacity and style from `preset` in one step.
    pub fn from_preset(preset: &OverlayPreset) -> Self {
        Self {
            overlay_color: Some(preset.color.to_owned()),
            overlay_opacity: Some(preset.opacity),
            overlay_style: Some(preset.id.to_owned()),
            ..Self::default()
        }
    }

    /// Whether applying this patch is a no-op for every state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine two patches; fields set in `later` win.
    pub fn merge(mut self, later: EditorPatch) -> Self {
        fn take<T>(slot: &mut Option<T>, later: Option<T>) {
            if later.is_some() {
                *slot = later;
            }
        }

        take(&mut self.photo, later.photo);
        take(&mut self.logo, later.logo);
        take(&mut self.headline, later.headline);
        take(&mut self.headline_color, later.headline_color);
        take(&mut self.headline_font, later.headline_font);
        take(&mut self.body, later.body);
        take(&mut self.body_color, later.body_color);
        take(&mut self.body_font, later.body_font);
        take(&mut self.footer, later.footer);
        take(&mut self.footer_color, later.footer_color);
        take(&mut self.footer_font, later.footer_font);
        take(&mut self.accent_color, later.accent_color);
        take(&mut self.overlay_color, later.overlay_color);
        take(&mut self.overlay_opacity, later.overlay_opacity);
        take(&mut self.overlay_direction, later.overlay_direction);
        take(&mut self.overlay_style, later.overlay_style);
        take(&mut self.date_badge, later.date_badge);
        take(&mut self.active_template, later.active_template);
        self
    }
}

/// Shallow-merge `patch` over `current`, returning the new state.
///
/// Field-level replacement only; `current` is not modified. Applying the same patch twice gives
/// the same state as applying it once.
pub fn apply_patch(current: &EditorState, patch: &EditorPatch) -> EditorState {
    fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
        if let Some(v) = value {
            *slot = v.clone();
        }
    }

    let mut next = current.clone();
    set(&mut next.photo, &patch.photo);
    set(&mut next.logo, &patch.logo);
    set(&mut next.headline, &patch.headline);
    set(&mut next.headline_color, &patch.headline_color);
    set(&mut next.headline_font, &patch.headline_font);
    set(&mut next.body, &patch.body);
    set(&mut next.body_color, &patch.body_color);
    set(&mut next.body_font, &patch.body_font);
    set(&mut next.footer, &patch.footer);
    set(&mut next.footer_color, &patch.footer_color);
    set(&mut next.footer_font, &patch.footer_font);
    set(&mut next.accent_color, &patch.accent_color);
    set(&mut next.overlay_color, &patch.overlay_color);
    set(&mut next.overlay_opacity, &patch.overlay_opacity);
    set(&mut next.overlay_direction, &patch.overlay_direction);
    set(&mut next.overlay_style, &patch.overlay_style);
    set(&mut next.date_badge, &patch.date_badge);
    set(&mut next.active_template, &patch.active_template);
    next
}

#[cfg(test)]
#[path = "../../tests/unit/editor/patch.rs"]
mod tests;
