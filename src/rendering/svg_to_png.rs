use crate::error::RenderError;
use crate::models::DisplaySize;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Renders SVG scenes to RGBA PNG byte buffers.
///
/// Holds the font database used for text rendering; built once at startup
/// and shared across requests.
pub struct SvgRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer with fonts loaded from the provided data, plus the
    /// system fonts as fallback.
    pub fn with_fonts(fonts: Vec<(String, Vec<u8>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data);
            tracing::debug!(font = %name, "Loaded font");
        }

        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a renderer with system fonts only.
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Rasterize an SVG document at the given pixel size and encode it as a
    /// PNG. The output is deterministic for identical input.
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        size: DisplaySize,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, size)?;
        encode_png(size, pixmap.data())
    }

    /// Parse and rasterize SVG to an RGBA pixmap, scaled to fit and centered
    /// on a white background.
    fn rasterize_svg(&self, svg_data: &[u8], size: DisplaySize) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = size.width as f32 / svg_size.width();
        let scale_y = size.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (size.width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (size.height as f32 - svg_size.height() * scale) / 2.0;

        let mut pixmap =
            Pixmap::new(size.width, size.height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode RGBA pixel data as a PNG. Everything is drawn over an opaque
/// white background, so the premultiplied pixmap data can be written as-is.
fn encode_png(size: DisplaySize, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, size.width, size.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
