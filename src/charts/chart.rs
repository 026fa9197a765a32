//! Scene assembly: layout, title, legend, axes, series and overlays.

use crate::charts::legend;
use crate::charts::overlay::{format_value, Overlay, ValueLabels};
use crate::charts::registry::KindRenderer;
use crate::charts::scale::{CategoryScale, LinearScale};
use crate::charts::svg::{SvgWriter, TextAnchor, TextStyle};
use crate::charts::Rect;
use crate::models::{ChartKind, ChartSpec, Rgba};

const BACKGROUND: Rgba = Rgba::opaque(255, 255, 255);

const TITLE_SIZE: f32 = 18.0;
const TITLE_COLOR: Rgba = Rgba::opaque(0x11, 0x11, 0x11);
const TITLE_PAD_TOP: f32 = 10.0;
const TITLE_PAD_BOTTOM: f32 = 20.0;

const TICK_SIZE: f32 = 12.0;
const TICK_COLOR: Rgba = Rgba::opaque(0x55, 0x55, 0x55);
const GRID_COLOR: Rgba = Rgba::opaque(0xe5, 0xe5, 0xe5);

const AXIS_MARGIN_LEFT: f32 = 40.0;
const AXIS_MARGIN_RIGHT: f32 = 16.0;
const AXIS_MARGIN_BOTTOM: f32 = 30.0;
const CIRCULAR_MARGIN: f32 = 10.0;
const CIRCULAR_MARGIN_BOTTOM: f32 = 14.0;

/// Finalized layout handed to a kind renderer: the plot rectangle plus the
/// axis scales (absent for circular kinds).
pub struct Frame {
    pub plot: Rect,
    pub x: Option<CategoryScale>,
    pub y: Option<LinearScale>,
}

/// One chart scene: a spec, its kind renderer and the post-draw overlays.
pub struct ChartScene<'a> {
    spec: &'a ChartSpec,
    renderer: &'a dyn KindRenderer,
    overlays: Vec<Box<dyn Overlay>>,
}

impl<'a> ChartScene<'a> {
    /// Scene with the default overlay set: the per-point value labels.
    pub fn new(spec: &'a ChartSpec, renderer: &'a dyn KindRenderer) -> Self {
        Self {
            spec,
            renderer,
            overlays: vec![Box::new(ValueLabels::default())],
        }
    }

    pub fn with_overlay(mut self, overlay: Box<dyn Overlay>) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Serialize the scene to an SVG document.
    pub fn to_svg(&self) -> String {
        let size = self.spec.kind.canvas_size();
        let width = size.width as f32;
        let height = size.height as f32;
        let mut svg = SvgWriter::new(size.width, size.height);

        svg.rect(0.0, 0.0, width, height, BACKGROUND);

        svg.text(
            width / 2.0,
            TITLE_PAD_TOP + TITLE_SIZE,
            &self.spec.title,
            &TextStyle {
                size: TITLE_SIZE,
                color: TITLE_COLOR,
                bold: true,
                anchor: TextAnchor::Middle,
            },
        );
        let header_bottom = TITLE_PAD_TOP + TITLE_SIZE + TITLE_PAD_BOTTOM;

        let entries = self.renderer.legend_entries(self.spec);
        legend::draw_legend(&mut svg, &entries, width, header_bottom);
        let plot_top = header_bottom + legend::LEGEND_ROW_HEIGHT + legend::LEGEND_PAD_BOTTOM;

        let frame = if self.renderer.needs_scales() {
            let plot = Rect {
                x: AXIS_MARGIN_LEFT,
                y: plot_top,
                w: width - AXIS_MARGIN_LEFT - AXIS_MARGIN_RIGHT,
                h: height - plot_top - AXIS_MARGIN_BOTTOM,
            };
            let max_value = self
                .spec
                .dataset
                .values
                .iter()
                .fold(0.0f64, |acc, &v| acc.max(v));
            let y = LinearScale::zero_based(max_value, plot.y, plot.bottom());
            // Bars sit at band centers; lines span the plot edge to edge.
            let x = CategoryScale::new(
                self.spec.labels.len(),
                plot.x,
                plot.right(),
                matches!(self.spec.kind, ChartKind::Bar),
            );
            draw_axes(&mut svg, &plot, &x, &y, &self.spec.labels);
            Frame {
                plot,
                x: Some(x),
                y: Some(y),
            }
        } else {
            Frame {
                plot: Rect {
                    x: CIRCULAR_MARGIN,
                    y: plot_top,
                    w: width - 2.0 * CIRCULAR_MARGIN,
                    h: height - plot_top - CIRCULAR_MARGIN_BOTTOM,
                },
                x: None,
                y: None,
            }
        };

        svg.group_start("series");
        let elements = self.renderer.draw(&frame, self.spec, &mut svg);
        svg.group_end();

        for overlay in &self.overlays {
            overlay.after_datasets_draw(&mut svg, &elements, &self.spec.dataset);
        }

        svg.finish()
    }
}

fn draw_axes(
    svg: &mut SvgWriter,
    plot: &Rect,
    x: &CategoryScale,
    y: &LinearScale,
    labels: &[String],
) {
    let tick_style = TextStyle {
        size: TICK_SIZE,
        color: TICK_COLOR,
        bold: false,
        anchor: TextAnchor::End,
    };
    let category_style = TextStyle {
        anchor: TextAnchor::Middle,
        ..tick_style
    };

    svg.group_start("axes");

    for tick in y.ticks() {
        let ty = y.y(tick);
        svg.line(plot.x, ty, plot.right(), ty, GRID_COLOR, 1.0);
        svg.text(plot.x - 6.0, ty + 4.0, &format_value(tick), &tick_style);
    }

    // Axis border lines.
    svg.line(plot.x, plot.y, plot.x, plot.bottom(), GRID_COLOR, 1.0);
    svg.line(
        plot.x,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        GRID_COLOR,
        1.0,
    );

    for (i, label) in labels.iter().enumerate() {
        svg.text(x.x(i), plot.bottom() + 18.0, label, &category_style);
    }

    svg.group_end();
}
