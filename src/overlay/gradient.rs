use crate::foundation::color::Rgb8;

/// Axis of a linear gradient, named the CSS way (`to top` starts at the bottom edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinearAxis {
    /// Bottom edge to top edge.
    ToTop,
    /// Top edge to bottom edge.
    ToBottom,
    /// Left edge to right edge.
    ToRight,
    /// Right edge to left edge.
    ToLeft,
}

impl LinearAxis {
    /// CSS direction keyword.
    pub fn css(self) -> &'static str {
        match self {
            Self::ToTop => "to top",
            Self::ToBottom => "to bottom",
            Self::ToRight => "to right",
            Self::ToLeft => "to left",
        }
    }

    /// Start and end points in unit bounding-box space, `(x1, y1, x2, y2)`.
    pub fn unit_vector(self) -> (f64, f64, f64, f64) {
        match self {
            Self::ToTop => (0.0, 1.0, 0.0, 0.0),
            Self::ToBottom => (0.0, 0.0, 0.0, 1.0),
            Self::ToRight => (0.0, 0.0, 1.0, 0.0),
            Self::ToLeft => (1.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Gradient geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientShape {
    /// Linear gradient along an axis.
    Linear(LinearAxis),
    /// Circular gradient centered on the layer.
    Radial,
}

/// One color stop. `alpha` is straight alpha and is kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Stop color.
    pub color: Rgb8,
    /// Stop alpha; not clamped here.
    pub alpha: f64,
    /// Position in `0..=1`; `None` lets the stop be placed implicitly.
    pub offset: Option<f64>,
}

impl GradientStop {
    /// Stop at an implicit position.
    pub fn new(color: Rgb8, alpha: f64) -> Self {
        Self {
            color,
            alpha,
            offset: None,
        }
    }

    /// Stop at an explicit position.
    pub fn at(color: Rgb8, alpha: f64, offset: f64) -> Self {
        Self {
            color,
            alpha,
            offset: Some(offset),
        }
    }
}

/// A CSS-equivalent gradient: a shape plus ordered stops.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    /// Geometry.
    pub shape: GradientShape,
    /// Stops in paint order (at least two).
    pub stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// Linear gradient.
    pub fn linear(axis: LinearAxis, stops: Vec<GradientStop>) -> Self {
        Self {
            shape: GradientShape::Linear(axis),
            stops,
        }
    }

    /// Radial gradient.
    pub fn radial(stops: Vec<GradientStop>) -> Self {
        Self {
            shape: GradientShape::Radial,
            stops,
        }
    }

    /// First stop (the origin edge for linear gradients, the center for radial ones).
    pub fn near_stop(&self) -> Option<&GradientStop> {
        self.stops.first()
    }

    /// Last stop.
    pub fn far_stop(&self) -> Option<&GradientStop> {
        self.stops.last()
    }

    /// Stop positions with implicit offsets resolved the way CSS does it: a missing first offset
    /// is 0, a missing last offset is 1, and runs of missing offsets in between are spread
    /// evenly. Offsets are kept monotonic.
    pub fn resolved_offsets(&self) -> Vec<f64> {
        let n = self.stops.len();
        let mut out: Vec<Option<f64>> = self.stops.iter().map(|s| s.offset).collect();
        if n == 0 {
            return Vec::new();
        }
        if out[0].is_none() {
            out[0] = Some(0.0);
        }
        if out[n - 1].is_none() {
            out[n - 1] = Some(1.0);
        }

        let mut i = 0;
        while i < n {
            if out[i].is_some() {
                i += 1;
                continue;
            }
            let start = i - 1;
            let mut end = i;
            while out[end].is_none() {
                end += 1;
            }
            let a = out[start].unwrap_or(0.0);
            let b = out[end].unwrap_or(1.0);
            let span = (end - start) as f64;
            for (k, slot) in out.iter_mut().enumerate().take(end).skip(i) {
                *slot = Some(a + (b - a) * ((k - start) as f64) / span);
            }
            i = end;
        }

        let mut prev = 0.0f64;
        out.into_iter()
            .map(|o| {
                let v = o.unwrap_or(prev).max(prev);
                prev = v;
                v
            })
            .collect()
    }

    /// CSS `background` value.
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| match s.offset {
                Some(off) => format!("{} {}%", s.color.css_rgba(s.alpha), percent(off)),
                None => s.color.css_rgba(s.alpha),
            })
            .collect::<Vec<_>>()
            .join(", ");

        match self.shape {
            GradientShape::Linear(axis) => format!("linear-gradient({}, {stops})", axis.css()),
            GradientShape::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}

fn percent(offset: f64) -> f64 {
    // 0.2 * 100.0 is not exactly 20.0
    (offset * 100_000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/gradient.rs"]
mod tests;
