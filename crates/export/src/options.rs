use serde::{Deserialize, Serialize};

/// Static text printed on every summary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub title: String,
    /// First footer line.
    pub generator: String,
    /// Printed after the copyright year on the second footer line.
    pub tagline: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "WHOLESALE DRESS ORDER SUMMARY".to_string(),
            generator: "Generated by Wholesale Dress Calculator".to_string(),
            tagline: "Professional Order Management".to_string(),
        }
    }
}
