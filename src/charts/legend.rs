//! Legend layout and drawing.

use crate::charts::svg::{SvgWriter, TextAnchor, TextStyle};
use crate::models::Rgba;

pub const LEGEND_FONT_SIZE: f32 = 13.0;
pub const LEGEND_ROW_HEIGHT: f32 = 14.0;
pub const LEGEND_PAD_BOTTOM: f32 = 12.0;

const LEGEND_COLOR: Rgba = Rgba::opaque(0x33, 0x33, 0x33);
const SWATCH_SIZE: f32 = 12.0;
const SWATCH_GAP: f32 = 5.0;
const ENTRY_SPACING: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
}

/// Draw one centered legend row. `top` is the top edge of the row.
pub fn draw_legend(svg: &mut SvgWriter, entries: &[LegendEntry], canvas_width: f32, top: f32) {
    if entries.is_empty() {
        return;
    }

    let entry_width = |e: &LegendEntry| {
        SWATCH_SIZE + SWATCH_GAP + approx_text_width(&e.label, LEGEND_FONT_SIZE)
    };
    let total: f32 = entries.iter().map(entry_width).sum::<f32>()
        + ENTRY_SPACING * (entries.len() - 1) as f32;
    let mut x = (canvas_width - total) / 2.0;

    let style = TextStyle {
        size: LEGEND_FONT_SIZE,
        color: LEGEND_COLOR,
        bold: false,
        anchor: TextAnchor::Start,
    };

    svg.group_start("legend");
    for entry in entries {
        svg.rect(x, top + 1.0, SWATCH_SIZE, SWATCH_SIZE, entry.color);
        svg.text(
            x + SWATCH_SIZE + SWATCH_GAP,
            top + LEGEND_FONT_SIZE - 2.0,
            &entry.label,
            &style,
        );
        x += entry_width(entry) + ENTRY_SPACING;
    }
    svg.group_end();
}

/// Rough width estimate used only to center the legend row; the rendered
/// text does not have to match it exactly.
fn approx_text_width(s: &str, size: f32) -> f32 {
    s.chars().count() as f32 * size * 0.58
}
