use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize summary document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to format summary document")]
    Format(#[from] core::fmt::Error),

    #[error("unknown export format '{0}' (expected html, text or json)")]
    UnknownFormat(String),
}
