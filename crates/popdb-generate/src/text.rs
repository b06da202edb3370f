/// Cut `text` to at most `max_len` characters.
///
/// Counts `char`s rather than bytes, matching how `varchar(n)` limits are
/// enforced, and never splits a code point.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
