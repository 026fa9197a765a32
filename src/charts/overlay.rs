//! Post-draw extension point.
//!
//! Overlays run synchronously after the primary chart elements are drawn,
//! with read access to the finalized per-element anchor positions.

use crate::charts::svg::{SvgWriter, TextAnchor, TextStyle};
use crate::charts::Point;
use crate::models::{DatasetSpec, Rgba};

/// One drawn data point: its value and the anchor position the backend
/// assigned to it (bar top, line point marker, arc mid-angle point).
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub anchor: Point,
    pub value: f64,
}

pub trait Overlay: Send + Sync {
    fn id(&self) -> &'static str;

    /// Called once per dataset after its elements are drawn, in
    /// dataset-then-index order.
    fn after_datasets_draw(
        &self,
        svg: &mut SvgWriter,
        elements: &[Element],
        dataset: &DatasetSpec,
    );
}

const LABEL_SIZE: f32 = 13.0;
const LABEL_COLOR: Rgba = Rgba::opaque(0, 0, 0);

/// Writes each data point's literal value as centered bold text a fixed
/// number of pixels above its anchor.
pub struct ValueLabels {
    pub offset: f32,
}

impl Default for ValueLabels {
    fn default() -> Self {
        Self { offset: 8.0 }
    }
}

impl Overlay for ValueLabels {
    fn id(&self) -> &'static str {
        "value_labels"
    }

    fn after_datasets_draw(
        &self,
        svg: &mut SvgWriter,
        elements: &[Element],
        _dataset: &DatasetSpec,
    ) {
        let style = TextStyle {
            size: LABEL_SIZE,
            color: LABEL_COLOR,
            bold: true,
            anchor: TextAnchor::Middle,
        };
        svg.group_start("value-labels");
        for element in elements {
            svg.text(
                element.anchor.x,
                element.anchor.y - self.offset,
                &format_value(element.value),
                &style,
            );
        }
        svg.group_end();
    }
}

/// Render a value the way it was written in the source data: integers
/// without a decimal point.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_integers() {
        assert_eq!(format_value(80.0), "80");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-5.0), "-5");
    }

    #[test]
    fn test_format_value_fractions() {
        assert_eq!(format_value(82.5), "82.5");
    }

    #[test]
    fn test_labels_sit_eight_pixels_above_anchor() {
        let elements = [Element {
            anchor: Point::new(100.0, 50.0),
            value: 80.0,
        }];
        let mut svg = SvgWriter::new(200, 100);
        ValueLabels::default().after_datasets_draw(
            &mut svg,
            &elements,
            &DatasetSpec::default(),
        );
        let doc = svg.finish();
        assert!(doc.contains("x=\"100\" y=\"42\""), "doc: {doc}");
        assert!(doc.contains(">80</text>"));
    }

    #[test]
    fn test_one_label_per_element() {
        let elements: Vec<Element> = (0..3)
            .map(|i| Element {
                anchor: Point::new(i as f32 * 10.0, 100.0),
                value: i as f64,
            })
            .collect();
        let mut svg = SvgWriter::new(200, 200);
        ValueLabels::default().after_datasets_draw(
            &mut svg,
            &elements,
            &DatasetSpec::default(),
        );
        let doc = svg.finish();
        assert_eq!(doc.matches("</text>").count(), 3);
    }
}
