use std::fmt::Write as _;

use crate::{
    foundation::core::{Rect, clamp_unit},
    overlay::gradient::{GradientShape, GradientSpec},
    scene::model::{
        Composition, FillLayer, GradientLayer, ImageClip, ImageFit, ImageLayer, Layer, TextAlign,
        TextLayer,
    },
};

/// Lower a composition to a standalone SVG document in canvas pixel units.
///
/// Alpha values are clamped to `[0, 1]` here, at the last point before pixels: gradient specs
/// keep whatever opacity the state carried.
#[tracing::instrument(skip(comp), fields(template = comp.template.id(), layers = comp.layers.len()))]
pub fn to_svg(comp: &Composition) -> String {
    let w = comp.canvas.width;
    let h = comp.canvas.height;

    let mut defs = String::new();
    let mut body = String::new();

    for (idx, layer) in comp.layers.iter().enumerate() {
        match layer {
            Layer::Fill(l) => write_fill(&mut body, l),
            Layer::Gradient(l) => write_gradient(&mut defs, &mut body, idx, l),
            Layer::Image(l) => write_image(&mut defs, &mut body, idx, l),
            Layer::Text(l) => write_text(&mut body, l),
        }
    }

    let mut out = String::with_capacity(defs.len() + body.len() + 512);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = write!(
        out,
        r#"<defs><clipPath id="frame"><rect x="0" y="0" width="{w}" height="{h}" rx="{}"/></clipPath>{defs}</defs>"#,
        num(comp.corner_radius.max(0.0))
    );
    let _ = write!(out, r#"<g clip-path="url(#frame)">{body}</g></svg>"#);
    out
}

fn write_fill(out: &mut String, l: &FillLayer) {
    let _ = write!(
        out,
        r#"<rect {} rx="{}" fill="{}" fill-opacity="{}"/>"#,
        rect_attrs(l.rect),
        num(l.corner_radius.max(0.0)),
        l.color.to_hex(),
        num(clamp_unit(l.opacity))
    );
}

fn write_gradient(defs: &mut String, out: &mut String, idx: usize, l: &GradientLayer) {
    let id = format!("grad{idx}");
    gradient_def(defs, &id, l.rect, &l.gradient);
    let _ = write!(out, r#"<rect {} fill="url(#{id})"/>"#, rect_attrs(l.rect));
}

fn gradient_def(defs: &mut String, id: &str, rect: Rect, g: &GradientSpec) {
    let mut stops = String::new();
    for (stop, offset) in g.stops.iter().zip(g.resolved_offsets()) {
        let _ = write!(
            stops,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            num(clamp_unit(offset)),
            stop.color.to_hex(),
            num(clamp_unit(stop.alpha))
        );
    }

    match g.shape {
        GradientShape::Linear(axis) => {
            let (ux1, uy1, ux2, uy2) = axis.unit_vector();
            let x = |u: f64| rect.x0 + u * rect.width();
            let y = |u: f64| rect.y0 + u * rect.height();
            let _ = write!(
                defs,
                r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{stops}</linearGradient>"#,
                num(x(ux1)),
                num(y(uy1)),
                num(x(ux2)),
                num(y(uy2))
            );
        }
        GradientShape::Radial => {
            // CSS `circle` defaults to `farthest-corner`.
            let c = rect.center();
            let r = rect.width().hypot(rect.height()) / 2.0;
            let _ = write!(
                defs,
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">{stops}</radialGradient>"#,
                num(c.x),
                num(c.y),
                num(r)
            );
        }
    }
}

fn write_image(defs: &mut String, out: &mut String, idx: usize, l: &ImageLayer) {
    let clip_id = format!("clip{idx}");
    match l.clip {
        ImageClip::Rect => {
            let _ = write!(
                defs,
                r#"<clipPath id="{clip_id}"><rect {}/></clipPath>"#,
                rect_attrs(l.rect)
            );
        }
        ImageClip::Circle => {
            let c = l.rect.center();
            let r = l.rect.width().min(l.rect.height()) / 2.0;
            let _ = write!(
                defs,
                r#"<clipPath id="{clip_id}"><circle cx="{}" cy="{}" r="{}"/></clipPath>"#,
                num(c.x),
                num(c.y),
                num(r)
            );
        }
    }

    let aspect = match l.fit {
        ImageFit::Cover => "xMidYMid slice",
        ImageFit::Contain => "xMidYMid meet",
    };
    let _ = write!(
        out,
        r#"<g clip-path="url(#{clip_id})" opacity="{}"><image {} preserveAspectRatio="{aspect}" xlink:href="{}"/></g>"#,
        num(clamp_unit(l.opacity)),
        rect_attrs(l.rect),
        escape(l.data.as_str())
    );
}

fn write_text(out: &mut String, l: &TextLayer) {
    let s = &l.style;
    let (anchor, x) = match s.align {
        TextAlign::Start => ("start", l.rect.x0),
        TextAlign::Center => ("middle", l.rect.center().x),
        TextAlign::End => ("end", l.rect.x1),
    };

    let _ = write!(
        out,
        r#"<text font-family="{}" font-size="{}" font-weight="{}" fill="{}" fill-opacity="{}" letter-spacing="{}" text-anchor="{anchor}" xml:space="preserve">"#,
        escape(s.font_stack),
        num(s.size_px),
        s.weight,
        s.color.to_hex(),
        num(clamp_unit(s.opacity)),
        num(s.letter_spacing_em * s.size_px),
    );

    let line_px = s.line_px();
    for (i, line) in l.lines.iter().enumerate() {
        // Baseline sits a little below the middle of the line box.
        let baseline = l.rect.y0 + (i as f64) * line_px + line_px / 2.0 + s.size_px * 0.35;
        let content = if s.uppercase {
            line.to_uppercase()
        } else {
            line.clone()
        };
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            num(x),
            num(baseline),
            escape(&content)
        );
    }
    out.push_str("</text>");
}

fn rect_attrs(r: Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        num(r.x0),
        num(r.y0),
        num(r.width().max(0.0)),
        num(r.height().max(0.0))
    )
}

/// Compact decimal for attributes: at most three fractional digits, no trailing zeros.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
