use super::*;
use crate::foundation::color::Rgb8;

fn style(size: f64) -> TextStyle {
    TextStyle::new("sans-serif", size, Rgb8::BLACK)
}

#[test]
fn short_text_is_one_line() {
    assert_eq!(wrap_text("Hello world", &style(10.0), 500.0), vec!["Hello world"]);
}

#[test]
fn wraps_at_word_boundaries() {
    // 10px * 0.5em = 5px per glyph -> 10 glyphs per 50px line.
    let lines = wrap_text("aaaa bbbb cccc", &style(10.0), 50.0);
    assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
}

#[test]
fn long_words_are_broken() {
    let lines = wrap_text("abcdefghijklmnop", &style(10.0), 25.0);
    assert_eq!(lines, vec!["abcde", "fghij", "klmno", "p"]);
}

#[test]
fn whitespace_collapses_and_empty_yields_nothing() {
    assert_eq!(wrap_text("a \n\n  b", &style(10.0), 500.0), vec!["a b"]);
    assert!(wrap_text("", &style(10.0), 500.0).is_empty());
    assert!(wrap_text("   ", &style(10.0), 500.0).is_empty());
}

#[test]
fn uppercase_and_bold_widen_estimates() {
    let plain = style(20.0);
    let loud = style(20.0).uppercase().weight(800);
    assert!(measure_line("abc", &loud) > measure_line("abc", &plain));
}

#[test]
fn wrapped_layer_keeps_text_verbatim_and_sizes_box() {
    let s = style(10.0).line_height(2.0);
    let layer = TextLayer::wrapped(
        LayerRole::Body,
        "aaaa bbbb cccc",
        s,
        Point::new(5.0, 7.0),
        50.0,
    );
    assert_eq!(layer.text, "aaaa bbbb cccc");
    assert_eq!(layer.lines.len(), 2);
    assert_eq!(layer.rect, Rect::new(5.0, 7.0, 55.0, 47.0));
}

#[test]
fn bottom_stack_places_upward() {
    let mut stack = BottomStack::new(100.0);
    let a = stack.place(TextLayer::wrapped(
        LayerRole::Footer,
        "x",
        style(10.0),
        Point::ZERO,
        100.0,
    ));
    stack.gap(5.0);
    let b = stack.place(TextLayer::wrapped(
        LayerRole::Body,
        "y",
        style(10.0),
        Point::ZERO,
        100.0,
    ));
    assert_eq!(a.rect.y1, 100.0);
    assert_eq!(b.rect.y1, a.rect.y0 - 5.0);
    assert_eq!(stack.top(), b.rect.y0);
}
