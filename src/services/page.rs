use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tera::{Context, Tera};

use crate::assets;
use crate::error::RenderError;
use crate::models::samples;
use crate::services::composer::ChartComposer;

const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// One filled image slot in the page template.
#[derive(Serialize)]
struct ChartSlot {
    title: String,
    data_uri: String,
    width: u32,
    height: u32,
}

/// Assembles the report page: four composed charts embedded as base64 data
/// URIs in the embedded HTML template.
pub struct PageAssembler {
    composer: Arc<ChartComposer>,
    tera: Tera,
}

impl PageAssembler {
    pub fn new(composer: Arc<ChartComposer>) -> Result<Self, PageError> {
        let source = assets::template_source(PAGE_TEMPLATE)
            .ok_or_else(|| PageError::NotFound(PAGE_TEMPLATE.to_string()))?;
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, &source)?;
        Ok(Self { composer, tera })
    }

    /// Compose the four sample charts in page order and render the document.
    /// Any composer failure aborts the whole page.
    pub fn assemble(&self) -> Result<String, PageError> {
        let mut slots = Vec::with_capacity(4);
        for spec in samples::report_charts() {
            let image = self.composer.compose(&spec)?;
            slots.push(ChartSlot {
                title: spec.title.clone(),
                data_uri: format!("data:image/png;base64,{}", BASE64.encode(&image.png)),
                width: image.display.width,
                height: image.display.height,
            });
        }

        let mut context = Context::new();
        context.insert("charts", &slots);
        let html = self.tera.render(PAGE_TEMPLATE, &context)?;

        tracing::debug!(bytes = html.len(), "Assembled report page");
        Ok(html)
    }
}
