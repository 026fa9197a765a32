pub mod chart_spec;
pub mod display_size;
pub mod samples;

pub use chart_spec::{ChartKind, ChartSpec, ColorSeq, DatasetSpec, Rgba};
pub use display_size::DisplaySize;
