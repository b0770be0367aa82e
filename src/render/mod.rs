//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::error::Result;
use crate::model::Documentation;

/// Trait for rendering assembled documentation into an output format.
pub trait Renderer {
    fn render(&self, doc: &Documentation) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, compact: bool) -> Option<Box<dyn Renderer>> {
    match format {
        "json" => Some(Box::new(json::JsonRenderer { pretty: !compact })),
        "markdown" | "md" => Some(Box::new(markdown::MarkdownRenderer)),
        _ => None,
    }
}
