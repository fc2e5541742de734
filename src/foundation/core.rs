pub use kurbo::{Point, Rect, Size};

/// Logical pixel dimensions of a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Canvas {
    /// The square post canvas every template renders into.
    pub const POST: Self = Self::square(1080);

    /// Square canvas of `side` pixels.
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Full-canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Device pixel size at `scale`, rounded up and never zero.
    pub fn scaled(self, scale: f32) -> (u32, u32) {
        fn dim(v: u32, scale: f32) -> u32 {
            ((v as f32) * scale).ceil().max(1.0) as u32
        }
        (dim(self.width, scale), dim(self.height, scale))
    }
}

/// Clamp a unit-interval value; non-finite input becomes `0`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}
