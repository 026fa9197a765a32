//! Line renderer.

use crate::charts::chart::Frame;
use crate::charts::overlay::Element;
use crate::charts::registry::KindRenderer;
use crate::charts::svg::{fmt, SvgWriter};
use crate::charts::Point;
use crate::models::ChartSpec;

const POINT_BORDER_WIDTH: f32 = 1.0;

/// A single stroked curve with circular point markers. Points span the plot
/// edge to edge; tension > 0 smooths the segments into cubic splines.
pub struct LineRenderer;

impl KindRenderer for LineRenderer {
    fn draw(&self, frame: &Frame, spec: &ChartSpec, svg: &mut SvgWriter) -> Vec<Element> {
        let (Some(xs), Some(ys)) = (&frame.x, &frame.y) else {
            return Vec::new();
        };

        let points: Vec<Point> = spec
            .dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(xs.x(i), ys.y(v)))
            .collect();

        if points.len() >= 2 {
            let d = curve_path(&points, spec.dataset.tension);
            svg.path(
                &d,
                None,
                Some((
                    spec.dataset.border_colors.color_at(0),
                    spec.dataset.border_width,
                )),
            );
        }

        for (i, point) in points.iter().enumerate() {
            svg.circle(
                point.x,
                point.y,
                spec.dataset.point_radius,
                spec.dataset.fill_colors.color_at(i),
                Some((spec.dataset.border_colors.color_at(i), POINT_BORDER_WIDTH)),
            );
        }

        points
            .iter()
            .zip(&spec.dataset.values)
            .map(|(&anchor, &value)| Element { anchor, value })
            .collect()
    }
}

/// Path through the points. With tension, control points follow the
/// distance-weighted spline the original backend uses: each knot's tangent
/// points from its predecessor to its successor.
fn curve_path(points: &[Point], tension: f32) -> String {
    let mut d = format!("M {} {}", fmt(points[0].x), fmt(points[0].y));
    if tension <= 0.0 {
        for p in &points[1..] {
            d.push_str(&format!(" L {} {}", fmt(p.x), fmt(p.y)));
        }
        return d;
    }

    let n = points.len();
    let mut before = vec![Point::new(0.0, 0.0); n];
    let mut after = vec![Point::new(0.0, 0.0); n];
    for i in 0..n {
        let prev = points[i.saturating_sub(1)];
        let cur = points[i];
        let next = points[(i + 1).min(n - 1)];
        let d01 = distance(prev, cur);
        let d12 = distance(cur, next);
        let sum = d01 + d12;
        let (s01, s12) = if sum > 0.0 {
            (d01 / sum, d12 / sum)
        } else {
            (0.0, 0.0)
        };
        before[i] = Point::new(
            cur.x - s01 * tension * (next.x - prev.x),
            cur.y - s01 * tension * (next.y - prev.y),
        );
        after[i] = Point::new(
            cur.x + s12 * tension * (next.x - prev.x),
            cur.y + s12 * tension * (next.y - prev.y),
        );
    }

    for i in 1..n {
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            fmt(after[i - 1].x),
            fmt(after[i - 1].y),
            fmt(before[i].x),
            fmt(before[i].y),
            fmt(points[i].x),
            fmt(points[i].y),
        ));
    }
    d
}

fn distance(a: Point, b: Point) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}
