//! # askpdf Knowledge
//!
//! The in-memory retrieval subsystem: chunking, embeddings, and
//! cosine-similarity ranking over one document.
//!
//! ## How it works
//! ```text
//! startup: PDF → extract text → 500-char chunks → embed each → VectorStore
//!
//! request: question → embed → cosine score vs every entry
//!   ↓
//! top 3 chunk texts, newline-joined
//!   ↓
//! injected into the generation prompt as context
//! ```
//!
//! The store is populated exactly once at process start and never mutated
//! afterwards. There is no persistence and no update path.

pub mod chunker;
pub mod document;
pub mod ingest;
pub mod store;

pub use chunker::chunk_text;
pub use store::{SearchResult, VectorStore};
