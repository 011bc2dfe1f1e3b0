use crate::document::SummaryDocument;
use crate::error::ExportResult;

use super::DocumentRenderer;

/// Machine-readable export; money amounts are decimal strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &SummaryDocument) -> ExportResult<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(out)
    }
}
