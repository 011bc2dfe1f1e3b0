//! Summary exporter: turns the cart and its totals into a printable document.
//!
//! [`SummaryExporter`] builds a [`SummaryDocument`] value with three ordered
//! sections. Renderers in [`render`] turn that value into HTML, plain text or
//! JSON; delivering the bytes (file, printer) is left to the caller.

pub mod document;
pub mod error;
pub mod exporter;
pub mod options;
pub mod render;

pub use document::{
    BreakdownLine, GeneratedAt, LineItem, OrderSummary, Section, SummaryDocument,
};
pub use error::{ExportError, ExportResult};
pub use exporter::SummaryExporter;
pub use options::ExportOptions;
pub use render::{DocumentRenderer, HtmlRenderer, JsonRenderer, RenderFormat, TextRenderer};
