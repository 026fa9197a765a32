//! Minimal SVG document writer.
//!
//! Only the elements the chart renderers need: rects, paths, circles, lines
//! and text. Coordinates are written with at most two decimals so the same
//! scene always serializes to the same bytes.

use crate::models::Rgba;

pub const FONT_FAMILY: &str = "Segoe UI, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub bold: bool,
    pub anchor: TextAnchor,
}

pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new(width: u32, height: u32) -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n"
        ));
        Self { buf }
    }

    pub fn group_start(&mut self, id: &str) {
        self.buf.push_str(&format!("<g id=\"{}\">\n", escape_xml(id)));
    }

    pub fn group_end(&mut self) {
        self.buf.push_str("</g>\n");
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgba) {
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
            fmt(x),
            fmt(y),
            fmt(w),
            fmt(h),
            fill_attrs(fill),
        ));
    }

    pub fn path(&mut self, d: &str, fill: Option<Rgba>, stroke: Option<(Rgba, f32)>) {
        self.buf.push_str(&format!(
            "<path d=\"{}\"{}{}/>\n",
            d,
            match fill {
                Some(f) => fill_attrs(f),
                None => " fill=\"none\"".to_string(),
            },
            stroke_attrs(stroke),
        ));
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: Rgba, stroke: Option<(Rgba, f32)>) {
        self.buf.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{}/>\n",
            fmt(cx),
            fmt(cy),
            fmt(r),
            fill_attrs(fill),
            stroke_attrs(stroke),
        ));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, width: f32) {
        self.buf.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            stroke_attrs(Some((color, width))),
        ));
    }

    pub fn text(&mut self, x: f32, y: f32, content: &str, style: &TextStyle) {
        let weight = if style.bold { " font-weight=\"bold\"" } else { "" };
        self.buf.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{} \
             text-anchor=\"{}\" fill=\"{}\">{}</text>\n",
            fmt(x),
            fmt(y),
            FONT_FAMILY,
            fmt(style.size),
            weight,
            style.anchor.as_str(),
            style.color.hex(),
            escape_xml(content),
        ));
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

/// Format a coordinate with at most two decimals, trailing zeros trimmed.
pub fn fmt(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn fill_attrs(fill: Rgba) -> String {
    if fill.alpha() < 1.0 {
        format!(" fill=\"{}\" fill-opacity=\"{}\"", fill.hex(), fmt(fill.alpha()))
    } else {
        format!(" fill=\"{}\"", fill.hex())
    }
}

fn stroke_attrs(stroke: Option<(Rgba, f32)>) -> String {
    match stroke {
        Some((color, width)) => {
            let opacity = if color.alpha() < 1.0 {
                format!(" stroke-opacity=\"{}\"", fmt(color.alpha()))
            } else {
                String::new()
            };
            format!(
                " stroke=\"{}\" stroke-width=\"{}\"{}",
                color.hex(),
                fmt(width),
                opacity
            )
        }
        None => String::new(),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
