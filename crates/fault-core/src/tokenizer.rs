// fault-core/src/tokenizer.rs
//! Query and catalog text tokenization

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not part of a token. `/`, `-` and `+` stay inside tokens so that
/// part numbers like `xfs-2/q+` survive.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9/\-+]+").expect("separator pattern is valid"));

/// Split free text into lowercase tokens.
///
/// Order and duplicates are preserved; callers needing a set deduplicate themselves.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SEPARATORS
        .split(&lowered)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize an optional field, treating a missing value as empty text.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}
