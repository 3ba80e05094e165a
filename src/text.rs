//! Text helpers: normalization, tokenization and preview truncation.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

#[allow(clippy::expect_used)]
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word regex is valid"));

/// NFKC-normalize `text` and collapse runs of whitespace to a single space.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into word tokens (letters and digits).
#[must_use]
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let normalized = normalize_text(text);
    WORD_RE
        .find_iter(&normalized)
        .map(|m| {
            if lowercase {
                m.as_str().to_lowercase()
            } else {
                m.as_str().to_string()
            }
        })
        .collect()
}

/// First `max_chars` characters of `text`, followed by `suffix` only when something was cut.
#[must_use]
pub fn content_preview(text: &str, max_chars: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut preview = String::with_capacity(byte_idx + suffix.len());
            preview.push_str(&text[..byte_idx]);
            preview.push_str(suffix);
            preview
        }
        None => text.to_string(),
    }
}

/// `true` when `text` has nothing but whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
