//! Greedy word wrapping for caption text.
//!
//! Whitespace runs collapse to a single space. Words are never split or
//! reordered; a word wider than the limit sits alone on its own line.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::WrapError;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Reflow `text` into lines at most `width` characters wide.
///
/// Returns no lines for blank input.
pub fn wrap(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    if width == 0 {
        return Err(WrapError::ZeroWidth);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in whitespace().split(text.trim()).filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "../tests/rust/test_wrap.rs"]
mod tests;
