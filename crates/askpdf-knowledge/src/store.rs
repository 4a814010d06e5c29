//! Append-only in-memory vector store with cosine ranking.

use serde::Serialize;

/// One stored (chunk, embedding) pair.
#[derive(Debug, Clone)]
pub struct Entry {
    pub text: String,
    pub embedding: Vec<f32>,
}

/// A ranked search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub text: String,
    pub score: f32,
}

/// The retrieval store: an ordered, append-only sequence of entries,
/// populated once during startup ingestion and read-only afterwards.
#[derive(Debug, Default)]
pub struct VectorStore {
    entries: Vec<Entry>,
    ready: bool,
}

impl VectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a (chunk, embedding) pair, preserving insertion order.
    pub fn add_entry(&mut self, text: impl Into<String>, embedding: Vec<f32>) {
        self.entries.push(Entry {
            text: text.into(),
            embedding,
        });
    }

    /// Score every entry against `query` and return the `k` best, in
    /// descending score order. Ties keep insertion order (stable sort).
    /// Fewer than `k` entries returns all of them; an empty store returns
    /// an empty vec.
    pub fn top_k(&self, query: &[f32], k: usize) -> Vec<SearchResult> {
        let mut scored: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|e| SearchResult {
                text: e.text.clone(),
                score: cosine_similarity(query, &e.embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag the one-shot ingestion pass as finished (successfully or not).
    /// Purely observational — queries are never gated on it.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm or the lengths differ, so
/// degenerate entries rank behind any genuinely similar chunk instead of
/// injecting NaN into the sort.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = (norm_a * norm_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    dot / denominator
}
