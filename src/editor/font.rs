/// Generic stack used when a state font descriptor is not one of [`FontFamily::ALL`].
pub const FALLBACK_FONT_STACK: &str = "sans-serif";

/// The fixed set of fonts the control surface offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Bebas Neue.
    BebasNeue,
    /// Oswald.
    Oswald,
    /// Playfair Display.
    PlayfairDisplay,
    /// Roboto.
    Roboto,
    /// Montserrat.
    Montserrat,
    /// Poppins.
    Poppins,
}

impl FontFamily {
    /// All fonts in control-surface order.
    pub const ALL: [FontFamily; 6] = [
        Self::BebasNeue,
        Self::Oswald,
        Self::PlayfairDisplay,
        Self::Roboto,
        Self::Montserrat,
        Self::Poppins,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::BebasNeue => "Bebas Neue",
            Self::Oswald => "Oswald",
            Self::PlayfairDisplay => "Playfair Display",
            Self::Roboto => "Roboto",
            Self::Montserrat => "Montserrat",
            Self::Poppins => "Poppins",
        }
    }

    /// CSS font-family descriptor, the value stored in editor state.
    pub fn descriptor(self) -> &'static str {
        match self {
            Self::BebasNeue => "'Bebas Neue', sans-serif",
            Self::Oswald => "'Oswald', sans-serif",
            Self::PlayfairDisplay => "'Playfair Display', serif",
            Self::Roboto => "'Roboto', sans-serif",
            Self::Montserrat => "'Montserrat', sans-serif",
            Self::Poppins => "'Poppins', sans-serif",
        }
    }

    /// Exact descriptor lookup.
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.descriptor() == descriptor)
    }

    /// Lenient lookup by label: case-insensitive, spaces, dashes and underscores ignored
    /// (`playfair-display` finds Playfair Display).
    pub fn from_label(label: &str) -> Option<Self> {
        fn squash(s: &str) -> String {
            s.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        }

        let wanted = squash(label);
        Self::ALL.into_iter().find(|f| squash(f.label()) == wanted)
    }
}

/// Font stack to render with for a state descriptor; unknown descriptors degrade to
/// [`FALLBACK_FONT_STACK`].
pub fn resolve_font_stack(descriptor: &str) -> &'static str {
    match FontFamily::from_descriptor(descriptor) {
        Some(f) => f.descriptor(),
        None => {
            tracing::warn!(descriptor, "unknown font descriptor, using fallback stack");
            FALLBACK_FONT_STACK
        }
    }
}
