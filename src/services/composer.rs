use std::sync::Arc;

use crate::charts::{ChartScene, RendererRegistry};
use crate::error::RenderError;
use crate::models::{ChartSpec, DisplaySize};
use crate::rendering::SvgRenderer;

/// A composed chart: compressed raster bytes plus the display dimensions
/// the page should put on the embedding element.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub display: DisplaySize,
}

/// Turns a [`ChartSpec`] into a [`RenderedImage`].
///
/// Owns the renderer registry and the SVG rasterizer; both are built once
/// and shared across requests.
pub struct ChartComposer {
    registry: RendererRegistry,
    renderer: Arc<SvgRenderer>,
}

impl ChartComposer {
    pub fn new() -> Self {
        Self {
            registry: RendererRegistry::with_builtin_kinds(),
            renderer: Arc::new(SvgRenderer::new()),
        }
    }

    pub fn compose(&self, spec: &ChartSpec) -> Result<RenderedImage, RenderError> {
        spec.validate()?;
        let renderer = self
            .registry
            .get(spec.kind)
            .ok_or(RenderError::UnregisteredKind(spec.kind))?;

        let svg = ChartScene::new(spec, renderer).to_svg();
        let size = spec.kind.canvas_size();
        let png = self.renderer.render_to_png(svg.as_bytes(), size)?;

        tracing::debug!(
            kind = %spec.kind,
            title = %spec.title,
            bytes = png.len(),
            "Composed chart"
        );

        Ok(RenderedImage {
            png,
            display: spec.kind.display_size(),
        })
    }
}

impl Default for ChartComposer {
    fn default() -> Self {
        Self::new()
    }
}
