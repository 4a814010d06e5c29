//! Fixed-width document chunking.

/// Split text into non-overlapping windows of at most `max_chars`
/// characters, in original order.
///
/// Windows are counted in chars, never bytes, so multi-byte text is never
/// split inside a scalar value. Whitespace and newlines pass through
/// untouched, and the split has no boundary awareness — it may land
/// mid-word or mid-sentence. The final window may be shorter. Empty input
/// yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
