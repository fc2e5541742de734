use crate::{
    editor::state::EditorState,
    foundation::color::Rgb8,
    overlay::gradient::{GradientSpec, GradientStop, LinearAxis},
};

/// Direction id that selects the radial gradient.
pub const RADIAL_DIRECTION_ID: &str = "center";

/// Overlay style sentinel for hand-picked color/opacity.
pub const CUSTOM_STYLE_ID: &str = "custom";

/// How a direction id maps onto gradient geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionAxis {
    /// Linear gradient along the given axis.
    Linear(LinearAxis),
    /// Radial gradient.
    Radial,
}

/// A selectable overlay direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayDirection {
    /// Stable wire id.
    pub id: &'static str,
    /// Control-surface label.
    pub label: &'static str,
    /// Gradient geometry.
    pub axis: DirectionAxis,
}

/// All overlay directions in control-surface order.
pub static OVERLAY_DIRECTIONS: [OverlayDirection; 5] = [
    OverlayDirection {
        id: "bottom",
        label: "↑ Bottom",
        axis: DirectionAxis::Linear(LinearAxis::ToTop),
    },
    OverlayDirection {
        id: "top",
        label: "↓ Top",
        axis: DirectionAxis::Linear(LinearAxis::ToBottom),
    },
    OverlayDirection {
        id: "left",
        label: "→ Left",
        axis: DirectionAxis::Linear(LinearAxis::ToRight),
    },
    OverlayDirection {
        id: "right",
        label: "← Right",
        axis: DirectionAxis::Linear(LinearAxis::ToLeft),
    },
    OverlayDirection {
        id: RADIAL_DIRECTION_ID,
        label: "◎ Radial",
        axis: DirectionAxis::Radial,
    },
];

impl OverlayDirection {
    /// Look up a direction by id.
    pub fn find(id: &str) -> Option<&'static OverlayDirection> {
        OVERLAY_DIRECTIONS.iter().find(|d| d.id == id)
    }
}

/// Linear axis for a direction id; unknown ids (and the radial id) fall back to `to top`.
pub fn linear_axis_for(id: &str) -> LinearAxis {
    match OverlayDirection::find(id).map(|d| d.axis) {
        Some(DirectionAxis::Linear(axis)) => axis,
        _ => LinearAxis::ToTop,
    }
}

/// A named overlay color/opacity bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPreset {
    /// Stable wire id, also stored as `overlayStyle`.
    pub id: &'static str,
    /// Control-surface label.
    pub label: &'static str,
    /// Overlay color as stored in state (not necessarily valid hex).
    pub color: &'static str,
    /// Overlay opacity.
    pub opacity: f64,
}

/// All overlay presets in control-surface order.
pub static OVERLAY_PRESETS: [OverlayPreset; 6] = [
    OverlayPreset {
        id: "none",
        label: "None",
        color: "transparent",
        opacity: 0.0,
    },
    OverlayPreset {
        id: "dark",
        label: "Dark",
        color: "#000000",
        opacity: 0.6,
    },
    OverlayPreset {
        id: "light",
        label: "Light",
        color: "#FFFFFF",
        opacity: 0.7,
    },
    OverlayPreset {
        id: "warm",
        label: "Warm",
        color: "#8B4513",
        opacity: 0.4,
    },
    OverlayPreset {
        id: "cool",
        label: "Cool",
        color: "#1E3A5F",
        opacity: 0.5,
    },
    OverlayPreset {
        id: "red",
        label: "Red",
        color: "#8B0000",
        opacity: 0.45,
    },
];

impl OverlayPreset {
    /// Look up a preset by id. `custom` is not a preset.
    pub fn find(id: &str) -> Option<&'static OverlayPreset> {
        OVERLAY_PRESETS.iter().find(|p| p.id == id)
    }
}

/// Result of the overlay model.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    /// No overlay layer at all. Renderers omit the layer rather than drawing it transparent.
    None,
    /// Overlay layer painted with this gradient.
    Gradient(GradientSpec),
}

impl Overlay {
    /// The gradient, if there is one.
    pub fn gradient(&self) -> Option<&GradientSpec> {
        match self {
            Self::None => None,
            Self::Gradient(g) => Some(g),
        }
    }

    /// CSS `background` value (`none` when there is no overlay).
    pub fn to_css(&self) -> String {
        match self {
            Self::None => "none".to_owned(),
            Self::Gradient(g) => g.to_css(),
        }
    }
}

/// Inner stop of the radial overlay.
pub const RADIAL_INNER_STOP: f64 = 0.2;

/// Compute the overlay for `state`.
///
/// - opacity exactly `0` yields [`Overlay::None`] whatever the color or direction.
/// - the color decodes with [`Rgb8::from_hex_or_black`].
/// - `center` yields a radial gradient, transparent at 20% and `opacity` at 100%.
/// - any other direction yields a linear gradient from `opacity` at the origin edge to
///   transparent; unknown ids use `to top`.
///
/// `overlayOpacity` becomes the alpha channel as-is. Callers that accept programmatic input are
/// expected to clamp it to `[0, 1]` first; out-of-range values flow through unchanged.
pub fn build_overlay_gradient(state: &EditorState) -> Overlay {
    if state.overlay_opacity == 0.0 {
        return Overlay::None;
    }

    let color = Rgb8::from_hex_or_black(&state.overlay_color);
    let a = state.overlay_opacity;

    if state.overlay_direction == RADIAL_DIRECTION_ID {
        return Overlay::Gradient(GradientSpec::radial(vec![
            GradientStop::at(color, 0.0, RADIAL_INNER_STOP),
            GradientStop::at(color, a, 1.0),
        ]));
    }

    let axis = linear_axis_for(&state.overlay_direction);
    Overlay::Gradient(GradientSpec::linear(
        axis,
        vec![GradientStop::new(color, a), GradientStop::new(color, 0.0)],
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/model.rs"]
mod tests;
