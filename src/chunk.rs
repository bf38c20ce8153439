//! Splitting long transcriptions into Telegram-sized reply segments.

/// Split `text` into consecutive segments of at most `limit` characters.
///
/// Segments are contiguous, non-overlapping slices of the input in original
/// order; concatenating them reproduces the input exactly. Splits always
/// fall on character boundaries, never inside a multi-byte sequence.
/// Empty input yields no segments.
///
/// # Panics
/// Panics if `limit` is zero.
pub fn segments(text: &str, limit: usize) -> Vec<&str> {
    assert!(limit > 0, "segment limit must be positive");

    let mut out = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == limit {
            out.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        out.push(&text[start..]);
    }

    out
}
