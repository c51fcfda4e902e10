//! Leet-speak substitution
//!
//! Fixed single-character mapping approximating the most common password
//! obfuscations. Characters outside the mapping pass through untouched.

/// Map a single character to its leet replacement, if it has one
fn leet_char(c: char) -> Option<char> {
    match c {
        'a' | 'A' => Some('@'),
        'e' | 'E' => Some('3'),
        'i' | 'I' => Some('1'),
        'o' | 'O' => Some('0'),
        's' | 'S' => Some('$'),
        't' | 'T' => Some('7'),
        _ => None,
    }
}

/// Convert a word to leet-speak
pub fn to_leet(word: &str) -> String {
    word.chars().map(|c| leet_char(c).unwrap_or(c)).collect()
}
