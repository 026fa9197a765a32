//! Bar renderer.

use crate::charts::chart::Frame;
use crate::charts::overlay::Element;
use crate::charts::registry::KindRenderer;
use crate::charts::svg::{fmt, SvgWriter};
use crate::charts::Point;
use crate::models::ChartSpec;

const BAR_WIDTH_RATIO: f32 = 0.6;

/// Vertical bars at band centers, rounded at the top corners only.
pub struct BarRenderer;

impl KindRenderer for BarRenderer {
    fn draw(&self, frame: &Frame, spec: &ChartSpec, svg: &mut SvgWriter) -> Vec<Element> {
        let (Some(xs), Some(ys)) = (&frame.x, &frame.y) else {
            return Vec::new();
        };

        let bar_width = xs.band_width() * BAR_WIDTH_RATIO;
        let bottom = frame.plot.bottom();

        let mut elements = Vec::with_capacity(spec.dataset.values.len());
        for (i, &value) in spec.dataset.values.iter().enumerate() {
            let center_x = xs.x(i);
            let top = ys.y(value);
            let d = rounded_top_bar(
                center_x - bar_width / 2.0,
                top,
                bar_width,
                bottom,
                spec.dataset.corner_radius,
            );
            svg.path(
                &d,
                Some(spec.dataset.fill_colors.color_at(i)),
                Some((
                    spec.dataset.border_colors.color_at(i),
                    spec.dataset.border_width,
                )),
            );
            elements.push(Element {
                anchor: Point::new(center_x, top),
                value,
            });
        }
        elements
    }
}

/// Bar outline with only the two top corners rounded.
fn rounded_top_bar(x: f32, top: f32, width: f32, bottom: f32, radius: f32) -> String {
    let r = radius.min(width / 2.0).min((bottom - top).max(0.0));
    if r <= 0.0 {
        return format!(
            "M {} {} L {} {} L {} {} L {} {} Z",
            fmt(x),
            fmt(bottom),
            fmt(x),
            fmt(top),
            fmt(x + width),
            fmt(top),
            fmt(x + width),
            fmt(bottom),
        );
    }
    format!(
        "M {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Z",
        fmt(x),
        fmt(bottom),
        fmt(x),
        fmt(top + r),
        fmt(x),
        fmt(top),
        fmt(x + r),
        fmt(top),
        fmt(x + width - r),
        fmt(top),
        fmt(x + width),
        fmt(top),
        fmt(x + width),
        fmt(top + r),
        fmt(x + width),
        fmt(bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::scale::{CategoryScale, LinearScale};
    use crate::charts::Rect;
    use crate::models::samples;

    fn frame() -> Frame {
        let plot = Rect {
            x: 40.0,
            y: 74.0,
            w: 544.0,
            h: 296.0,
        };
        Frame {
            x: Some(CategoryScale::new(3, plot.x, plot.right(), true)),
            y: Some(LinearScale::zero_based(90.0, plot.y, plot.bottom())),
            plot,
        }
    }

    #[test]
    fn test_bar_anchors_sit_on_bar_tops() {
        let spec = samples::bar_chart();
        let f = frame();
        let mut svg = SvgWriter::new(600, 400);
        let elements = BarRenderer.draw(&f, &spec, &mut svg);
        assert_eq!(elements.len(), 3);
        let (xs, ys) = (f.x.as_ref().unwrap(), f.y.as_ref().unwrap());
        for (i, element) in elements.iter().enumerate() {
            assert_eq!(element.anchor.x, xs.x(i));
            assert_eq!(element.anchor.y, ys.y(spec.dataset.values[i]));
        }
    }

    #[test]
    fn test_bars_are_rounded() {
        let spec = samples::bar_chart();
        let mut svg = SvgWriter::new(600, 400);
        BarRenderer.draw(&frame(), &spec, &mut svg);
        let doc = svg.finish();
        // Two quadratic corners per bar.
        assert_eq!(doc.matches(" Q ").count(), 6);
    }

    #[test]
    fn test_zero_corner_radius_gives_square_bars() {
        let mut spec = samples::bar_chart();
        spec.dataset.corner_radius = 0.0;
        let mut svg = SvgWriter::new(600, 400);
        BarRenderer.draw(&frame(), &spec, &mut svg);
        let doc = svg.finish();
        assert_eq!(doc.matches(" Q ").count(), 0);
    }

    #[test]
    fn test_taller_value_has_smaller_y() {
        let spec = samples::bar_chart();
        let mut svg = SvgWriter::new(600, 400);
        let elements = BarRenderer.draw(&frame(), &spec, &mut svg);
        // 90 > 60 > 45, so anchors ascend on screen.
        assert!(elements[0].anchor.y < elements[1].anchor.y);
        assert!(elements[1].anchor.y < elements[2].anchor.y);
    }
}
