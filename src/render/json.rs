//! JSON renderer — structured output for tooling integration.

use crate::model::Module;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, module: &Module) -> String {
        let mut out =
            serde_json::to_string_pretty(module).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
