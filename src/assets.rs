//! Static assets compiled into the binary.

use rust_embed::RustEmbed;

/// Page templates.
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
pub struct Templates;

/// Load an embedded template as a string.
pub fn template_source(name: &str) -> Option<String> {
    Templates::get(name).map(|f| String::from_utf8_lossy(f.data.as_ref()).into_owned())
}
