//! Arc renderer for pie and doughnut charts.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::charts::chart::Frame;
use crate::charts::legend::LegendEntry;
use crate::charts::overlay::Element;
use crate::charts::registry::KindRenderer;
use crate::charts::svg::{fmt, SvgWriter};
use crate::charts::Point;
use crate::models::ChartSpec;

const RADIUS_PAD: f32 = 4.0;

/// Renders proportional segments starting at 12 o'clock and advancing
/// clockwise. `cutout` is the inner radius as a fraction of the outer
/// radius: 0.0 for pie, 0.5 for doughnut.
pub struct ArcRenderer {
    pub cutout: f32,
}

impl KindRenderer for ArcRenderer {
    fn needs_scales(&self) -> bool {
        false
    }

    fn legend_entries(&self, spec: &ChartSpec) -> Vec<LegendEntry> {
        spec.labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry {
                label: label.clone(),
                color: spec.dataset.fill_colors.color_at(i),
            })
            .collect()
    }

    fn draw(&self, frame: &Frame, spec: &ChartSpec, svg: &mut SvgWriter) -> Vec<Element> {
        let center = frame.plot.center();
        let outer = frame.plot.w.min(frame.plot.h) / 2.0 - RADIUS_PAD;
        let inner = outer * self.cutout;

        let total: f64 = spec.dataset.values.iter().sum();
        if total <= 0.0 {
            // Nothing to draw; anchor every point at the center so overlays
            // still get one element per value.
            return spec
                .dataset
                .values
                .iter()
                .map(|&value| Element {
                    anchor: center,
                    value,
                })
                .collect();
        }

        let mut elements = Vec::with_capacity(spec.dataset.values.len());
        let mut start = -FRAC_PI_2;
        for (i, &value) in spec.dataset.values.iter().enumerate() {
            let sweep = (value / total) as f32 * TAU;
            if sweep > 0.0 {
                let d = segment_path(center, outer, inner, start, sweep);
                svg.path(
                    &d,
                    Some(spec.dataset.fill_colors.color_at(i)),
                    Some((
                        spec.dataset.border_colors.color_at(i),
                        spec.dataset.border_width,
                    )),
                );
            }
            // Anchor: mid-angle, midway between inner and outer radius
            // (half the radius for a pie).
            let mid = start + sweep / 2.0;
            elements.push(Element {
                anchor: polar(center, (inner + outer) / 2.0, mid),
                value,
            });
            start += sweep;
        }
        elements
    }
}

fn polar(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn segment_path(center: Point, outer: f32, inner: f32, start: f32, sweep: f32) -> String {
    // A full-turn arc degenerates in SVG path syntax (start == end), so
    // clamp just under a full turn.
    let sweep = sweep.min(TAU - 1e-3);
    let end = start + sweep;
    let large = if sweep > std::f32::consts::PI { 1 } else { 0 };

    let p0 = polar(center, outer, start);
    let p1 = polar(center, outer, end);

    if inner > 0.0 {
        let q1 = polar(center, inner, end);
        let q0 = polar(center, inner, start);
        format!(
            "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
            fmt(p0.x),
            fmt(p0.y),
            fmt(outer),
            fmt(outer),
            large,
            fmt(p1.x),
            fmt(p1.y),
            fmt(q1.x),
            fmt(q1.y),
            fmt(inner),
            fmt(inner),
            large,
            fmt(q0.x),
            fmt(q0.y),
        )
    } else {
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            fmt(center.x),
            fmt(center.y),
            fmt(p0.x),
            fmt(p0.y),
            fmt(outer),
            fmt(outer),
            large,
            fmt(p1.x),
            fmt(p1.y),
        )
    }
}
