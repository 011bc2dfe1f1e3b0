//! Renderers that turn a [`SummaryDocument`] into bytes for delivery.

mod html;
mod json;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use core::str::FromStr;

use crate::document::SummaryDocument;
use crate::error::{ExportError, ExportResult};

/// Turns a summary document into a concrete representation.
pub trait DocumentRenderer {
    /// Suggested file extension (without the dot).
    fn extension(&self) -> &'static str;

    fn render(&self, document: &SummaryDocument) -> ExportResult<String>;
}

/// Output formats selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl RenderFormat {
    pub fn renderer(self) -> Box<dyn DocumentRenderer> {
        match self {
            RenderFormat::Html => Box::new(HtmlRenderer),
            RenderFormat::Text => Box::new(TextRenderer),
            RenderFormat::Json => Box::new(JsonRenderer { pretty: true }),
        }
    }

    /// Pick a format from a file extension, if it names one.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(RenderFormat::Html),
            "txt" => Some(RenderFormat::Text),
            "json" => Some(RenderFormat::Json),
            _ => None,
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "text" | "txt" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}
