use std::fmt;

/// Straight (non-premultiplied) 8-bit RGB color.
///
/// Colors in editor state are plain `#RRGGBB` strings; this is what they decode to at the point
/// of use. Decoding never fails: see [`Rgb8::from_hex_or_black`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional, hex digits are case-insensitive).
    ///
    /// Short forms, alpha suffixes, whitespace and named colors are all rejected.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        fn hex_byte(pair: &str) -> Option<u8> {
            u8::from_str_radix(pair, 16).ok()
        }

        Some(Self::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }

    /// Decode a state color, degrading malformed input to black.
    pub fn from_hex_or_black(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or(Self::BLACK)
    }

    /// Standard HSL -> RGB conversion (`h` in degrees, `s`/`l` in `0..=1`).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        if s == 0.0 {
            let v = to_u8(l);
            return Self::new(v, v, v);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self::new(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Lowercase `#rrggbb` form, as used in SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r,g,b,a)` with `a` printed verbatim (no clamping).
    pub fn css_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
