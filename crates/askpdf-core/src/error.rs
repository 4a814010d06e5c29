//! Error taxonomy for askpdf.

use thiserror::Error;

/// All errors surfaced by askpdf crates.
#[derive(Error, Debug)]
pub enum AskPdfError {
    /// The caller supplied no question (or an empty one).
    #[error("Question is required")]
    MissingQuestion,

    /// No API key configured for the given provider.
    #[error("No API key configured for {0} (set GEMINI_API_KEY)")]
    ApiKeyMissing(String),

    /// Outbound HTTP call failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The upstream AI service returned an error response.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Document ingestion failed (read, parse, or embed).
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AskPdfError>;
