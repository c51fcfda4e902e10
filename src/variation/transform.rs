//! Case and ordering transforms applied to single tokens
//!
//! Case mapping is locale-independent: each character goes through Rust's
//! default Unicode mapping. ASCII input maps one to one. Outside ASCII a
//! character may map to several (`ß` uppercases to `SS`), so a transformed
//! form can be longer than its source and the length filter sees the result.

/// First character uppercased, the rest lowercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Characters in reverse order
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Alternate case by 0-based character position.
///
/// With `upper_first` false, even positions are lowercased and odd
/// positions uppercased (`aRyAn`); with `upper_first` true it is inverted.
pub fn alternate_case(word: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(word.len());
    for (i, c) in word.chars().enumerate() {
        if (i % 2 == 0) == upper_first {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
