//! Flat-Key Encoding
//!
//! Implements the bidirectional mapping between segment sequences and flat
//! keys. The contract is exact reversibility: for any separator-free segment
//! sequence `s`, `split_key(&join_key(s)?) == s` — including when the last
//! segment is empty, which is how scan boundaries are built.
//!
//! Segments containing the separator would silently corrupt the namespace
//! (a split would yield more segments than were joined), so `join_key`
//! validates eagerly and returns an error instead.

use crate::store::StorageError;

/// The delimiter joining key segments: ASCII unit separator (U+001F).
///
/// Chosen because it is a control character that does not occur in
/// well-formed identifiers, so ordinary segments never need escaping.
pub const SEPARATOR: char = '\u{1f}';

/// Joins key segments into a single flat key for the backing store.
///
/// An empty trailing segment is allowed and meaningful: `["users", ""]`
/// encodes to `"users\u{1f}"`, the boundary that prefix-scans everything
/// under `users` without matching `users` itself.
///
/// # Errors
///
/// Returns [`StorageError::InvalidSegment`] if any segment contains the
/// separator character, since such a key could not be split back losslessly.
pub fn join_key<S: AsRef<str>>(segments: &[S]) -> Result<String, StorageError> {
    let mut flat = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if segment.contains(SEPARATOR) {
            return Err(StorageError::InvalidSegment(segment.to_string()));
        }
        if i > 0 {
            flat.push(SEPARATOR);
        }
        flat.push_str(segment);
    }
    Ok(flat)
}

/// Splits a flat key back into its segments.
///
/// Exact inverse of [`join_key`] for any key it produced. Behavior on keys
/// written by other software is unspecified.
pub fn split_key(key: &str) -> Vec<String> {
    key.split(SEPARATOR).map(str::to_string).collect()
}
