use crate::error::RenderError;
use crate::models::DisplaySize;

/// The four supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Doughnut,
}

impl ChartKind {
    /// Circular kinds render on a square canvas and carry no axis scales.
    pub fn is_circular(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }

    /// Canvas pixel dimensions for this kind.
    pub fn canvas_size(&self) -> DisplaySize {
        if self.is_circular() {
            DisplaySize::SQUARE
        } else {
            DisplaySize::WIDE
        }
    }

    /// Intended display dimensions in the page. Canonically equal to the
    /// canvas size, but kept as a separate lookup since the page may scale
    /// the embedded image independently.
    pub fn display_size(&self) -> DisplaySize {
        self.canvas_size()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Doughnut => "doughnut",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RGBA styling color. Serialized to SVG as a hex fill plus a separate
/// opacity attribute, since plain SVG fills carry no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn alpha(&self) -> f32 {
        self.a
    }
}

/// One color for the whole dataset, or one per data point (cycled by index).
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSeq {
    Single(Rgba),
    PerValue(Vec<Rgba>),
}

impl ColorSeq {
    pub fn color_at(&self, index: usize) -> Rgba {
        match self {
            ColorSeq::Single(c) => *c,
            ColorSeq::PerValue(seq) => seq[index % seq.len()],
        }
    }
}

/// Declarative description of a single dataset: the values plus the visual
/// styling the renderers consume. Kind-specific knobs (corner radius for
/// bars, tension and point radius for lines) are ignored by the other kinds.
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    pub label: String,
    pub values: Vec<f64>,
    pub fill_colors: ColorSeq,
    pub border_colors: ColorSeq,
    pub border_width: f32,
    /// Bar charts: rounding applied to the top corners of each bar.
    pub corner_radius: f32,
    /// Line charts: curve tension, 0.0 = straight segments.
    pub tension: f32,
    /// Line charts: radius of the point markers.
    pub point_radius: f32,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            label: String::new(),
            values: Vec::new(),
            fill_colors: ColorSeq::Single(Rgba::opaque(0, 0, 0)),
            border_colors: ColorSeq::Single(Rgba::opaque(0, 0, 0)),
            border_width: 1.0,
            corner_radius: 0.0,
            tension: 0.0,
            point_radius: 3.0,
        }
    }
}

/// Declarative description of one chart to render.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub dataset: DatasetSpec,
}

impl ChartSpec {
    /// Every dataset must carry exactly one value per category label.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.dataset.values.len() != self.labels.len() {
            return Err(RenderError::DatasetMismatch {
                values: self.dataset.values.len(),
                labels: self.labels.len(),
            });
        }
        Ok(())
    }
}
