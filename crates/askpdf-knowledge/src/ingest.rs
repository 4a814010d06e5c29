//! One-shot startup ingestion: document text → chunks → embeddings → store.

use std::path::Path;
use std::sync::RwLock;

use askpdf_core::error::Result;
use askpdf_core::traits::Embedder;

use crate::chunker::chunk_text;
use crate::store::VectorStore;

/// Chunk `text` and embed each chunk in order, appending the pairs to the
/// store. Returns the number of chunks stored.
///
/// The first embedding failure aborts the pass; entries appended before it
/// stay in the store (no rollback).
pub async fn ingest_text(
    store: &RwLock<VectorStore>,
    embedder: &dyn Embedder,
    text: &str,
    chunk_size: usize,
) -> Result<usize> {
    let chunks = chunk_text(text, chunk_size);
    let total = chunks.len();

    for chunk in chunks {
        let embedding = embedder.embed(&chunk).await?;
        store
            .write()
            .expect("vector store lock poisoned")
            .add_entry(chunk, embedding);
    }

    Ok(total)
}

/// Load the document at `path` and ingest it.
///
/// Failures are logged, not propagated — the process keeps serving over
/// whatever partial (possibly empty) store was built. The store is marked
/// ready either way, since the one-shot pass will not run again.
pub async fn ingest_document(
    store: &RwLock<VectorStore>,
    embedder: &dyn Embedder,
    path: &Path,
    chunk_size: usize,
) {
    let outcome = match crate::document::extract_pdf_text(path) {
        Ok(text) => ingest_text(store, embedder, &text, chunk_size).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(count) => {
            tracing::info!("📚 Document loaded: {count} chunks stored");
        }
        Err(e) => {
            let stored = store.read().expect("vector store lock poisoned").len();
            tracing::error!("❌ Ingestion failed after {stored} chunk(s): {e}");
        }
    }

    store
        .write()
        .expect("vector store lock poisoned")
        .mark_ready();
}
