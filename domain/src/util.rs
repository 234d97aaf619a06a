//! Shared utility functions.

/// Clip a string to at most `max_chars` characters.
///
/// Returns a sub-slice of the original string. If the string has fewer
/// than `max_chars` characters, the entire string is returned unchanged.
/// Counting is by `char`, so multi-byte text is never split mid-character.
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
