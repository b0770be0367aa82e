//! JSON renderer — the `{ list, tree }` structure as is.
//!
//! This is the hand-off format for external templating and tooling.

use crate::error::Result;
use crate::model::Documentation;
use crate::render::Renderer;

pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Documentation) -> Result<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        out.push('\n');
        Ok(out)
    }
}
