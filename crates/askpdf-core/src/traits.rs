//! Provider traits.
//!
//! The gateway talks to the embedding and generation services only through
//! these seams, so tests can swap in stub implementations and the Gemini
//! client stays an implementation detail of `askpdf-providers`.

use async_trait::async_trait;

use crate::error::Result;

/// Turns a text into a fixed-length embedding vector.
///
/// Dimensionality is opaque to the rest of the system; vectors are only
/// ever dotted and normed.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Produces a free-text completion for a prompt.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
