use crate::{
    foundation::core::{Point, Rect},
    scene::model::{LayerRole, TextLayer, TextStyle},
};

// Average advance per glyph as a fraction of the font size. Templates lay out text before any
// font is loaded, so widths are estimates tuned for the bundled display faces; the rasterizer
// draws with real metrics inside the estimated boxes.
const BASE_ADVANCE_EM: f64 = 0.5;
const UPPERCASE_EXTRA_EM: f64 = 0.1;
const BOLD_EXTRA_EM: f64 = 0.04;

fn advance_em(style: &TextStyle) -> f64 {
    let mut em = BASE_ADVANCE_EM;
    if style.uppercase {
        em += UPPERCASE_EXTRA_EM;
    }
    if style.weight >= 700 {
        em += BOLD_EXTRA_EM;
    }
    em + style.letter_spacing_em
}

/// Estimated rendered width of a single line.
pub fn measure_line(line: &str, style: &TextStyle) -> f64 {
    line.chars().count() as f64 * style.size_px * advance_em(style)
}

/// Greedy word wrap to `max_width`.
///
/// Whitespace runs (including newlines) collapse to single spaces, like HTML text. Words wider
/// than the box are broken between characters. Empty or all-whitespace text yields no lines.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let glyph = (style.size_px * advance_em(style)).max(f64::EPSILON);
    let max_chars = ((max_width / glyph).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

impl TextLayer {
    /// Wrap `text` into a box `width` wide whose top-left corner is `origin`.
    pub fn wrapped(
        role: LayerRole,
        text: &str,
        style: TextStyle,
        origin: Point,
        width: f64,
    ) -> Self {
        let lines = wrap_text(text, &style, width);
        let height = lines.len() as f64 * style.line_px();
        Self {
            role,
            text: text.to_owned(),
            lines,
            rect: Rect::new(origin.x, origin.y, origin.x + width, origin.y + height),
            style,
        }
    }

    /// Single unwrapped line sized to its estimated width.
    pub fn single_line(role: LayerRole, text: &str, style: TextStyle, origin: Point) -> Self {
        let width = measure_line(text, &style);
        let height = style.line_px();
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_owned()]
        };
        Self {
            role,
            text: text.to_owned(),
            lines,
            rect: Rect::new(origin.x, origin.y, origin.x + width, origin.y + height),
            style,
        }
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Same layer with its box moved so the top edge is at `y`.
    pub fn with_top(mut self, y: f64) -> Self {
        let h = self.rect.height();
        self.rect = Rect::new(self.rect.x0, y, self.rect.x1, y + h);
        self
    }
}

/// Places blocks upward from a bottom edge, like a bottom-anchored flex column.
#[derive(Clone, Copy, Debug)]
pub struct BottomStack {
    cursor: f64,
}

impl BottomStack {
    /// Stack whose first block sits on `bottom`.
    pub fn new(bottom: f64) -> Self {
        Self { cursor: bottom }
    }

    /// Reserve `height` above the cursor and return the top of the reserved band.
    pub fn take(&mut self, height: f64) -> f64 {
        self.cursor -= height;
        self.cursor
    }

    /// Place a text layer above the cursor.
    pub fn place(&mut self, layer: TextLayer) -> TextLayer {
        let top = self.take(layer.height());
        layer.with_top(top)
    }

    /// Leave a gap of `px` above the cursor.
    pub fn gap(&mut self, px: f64) {
        self.cursor -= px;
    }

    /// Current top edge of the stack.
    pub fn top(&self) -> f64 {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
