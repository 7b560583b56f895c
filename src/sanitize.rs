// src/sanitize.rs

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string into its search key: lowercase, canonical decomposition,
/// combining marks dropped. "đ" (U+0111) survives NFD as a base letter,
/// so it is mapped to "d" by hand; lowercasing already took care of "Đ".
///
/// Total over arbitrary input, and idempotent: folding a folded key is a
/// no-op. `search_key("") == ""`.
pub fn search_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.to_lowercase().nfd() {
        if is_combining_mark(ch) { continue; }
        out.push(if ch == 'đ' { 'd' } else { ch });
    }
    out
}

/// Substring match on folded keys. Empty needle matches everything.
pub fn key_contains(haystack: &str, needle_key: &str) -> bool {
    search_key(haystack).contains(needle_key)
}

/// Exact match on folded keys.
pub fn key_eq(a: &str, b_key: &str) -> bool {
    search_key(a) == b_key
}
