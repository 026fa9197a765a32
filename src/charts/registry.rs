//! Renderer-capability registry.
//!
//! One renderer per chart kind, registered once at startup before the
//! listener accepts connections. The registry is immutable afterwards.

use std::collections::HashMap;

use crate::charts::arc::ArcRenderer;
use crate::charts::bar::BarRenderer;
use crate::charts::chart::Frame;
use crate::charts::legend::LegendEntry;
use crate::charts::line::LineRenderer;
use crate::charts::overlay::Element;
use crate::charts::svg::SvgWriter;
use crate::models::{ChartKind, ChartSpec};

pub trait KindRenderer: Send + Sync {
    /// Draw the primary chart elements into `svg` and return one anchor
    /// element per data point, in index order.
    fn draw(&self, frame: &Frame, spec: &ChartSpec, svg: &mut SvgWriter) -> Vec<Element>;

    /// Whether this kind renders axis scales. Circular kinds return false
    /// and get a bare plot rectangle instead.
    fn needs_scales(&self) -> bool {
        true
    }

    /// Legend entries for this kind. Kinds with one color per dataset list
    /// the dataset label; circular kinds override this with one entry per
    /// category.
    fn legend_entries(&self, spec: &ChartSpec) -> Vec<LegendEntry> {
        vec![LegendEntry {
            label: spec.dataset.label.clone(),
            color: spec.dataset.fill_colors.color_at(0),
        }]
    }
}

pub struct RendererRegistry {
    renderers: HashMap<ChartKind, Box<dyn KindRenderer>>,
}

impl RendererRegistry {
    /// Registry with the four built-in kinds. Pie and doughnut share the
    /// arc renderer, parameterized by cutout.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self {
            renderers: HashMap::new(),
        };
        registry.register(ChartKind::Pie, Box::new(ArcRenderer { cutout: 0.0 }));
        registry.register(ChartKind::Doughnut, Box::new(ArcRenderer { cutout: 0.5 }));
        registry.register(ChartKind::Bar, Box::new(BarRenderer));
        registry.register(ChartKind::Line, Box::new(LineRenderer));
        registry
    }

    pub fn register(&mut self, kind: ChartKind, renderer: Box<dyn KindRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    pub fn get(&self, kind: ChartKind) -> Option<&dyn KindRenderer> {
        self.renderers.get(&kind).map(|r| r.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_all_kinds() {
        let registry = RendererRegistry::with_builtin_kinds();
        for kind in [
            ChartKind::Pie,
            ChartKind::Bar,
            ChartKind::Line,
            ChartKind::Doughnut,
        ] {
            assert!(registry.get(kind).is_some(), "missing renderer for {kind}");
        }
    }

    #[test]
    fn test_circular_renderers_suppress_scales() {
        let registry = RendererRegistry::with_builtin_kinds();
        assert!(!registry.get(ChartKind::Pie).unwrap().needs_scales());
        assert!(!registry.get(ChartKind::Doughnut).unwrap().needs_scales());
        assert!(registry.get(ChartKind::Bar).unwrap().needs_scales());
        assert!(registry.get(ChartKind::Line).unwrap().needs_scales());
    }
}
