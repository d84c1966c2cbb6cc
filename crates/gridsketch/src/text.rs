//! Word wrapping and measurement for text shapes.
//!
//! Text shapes only split their content on `\n`; these helpers let a caller
//! wrap free text to a width first and size the shape from the result. Widths
//! are counted in `char`s, one cell each.

use serde::Serialize;

/// The size of wrapped text in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub width: usize,
    pub height: usize,
}

/// Wraps `text` into lines no wider than `max_width`.
///
/// Existing newlines start new lines, runs of whitespace between words
/// collapse to one space, and words longer than `max_width` are broken at
/// the width. A `max_width` of zero is treated as one.
///
/// # Examples
///
/// ```
/// # use gridsketch::text::wrap;
/// assert_eq!(wrap("the quick brown fox", 10), ["the quick", "brown fox"]);
/// assert_eq!(wrap("abcdefg", 3), ["abc", "def", "g"]);
/// ```
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            if chars.len() > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                lines.extend(chars.chunks(max_width).map(|chunk| chunk.iter().collect()));
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = chars.len();
            } else if current_width + 1 + chars.len() <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + chars.len();
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = chars.len();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Measures `text` wrapped to `max_width`; both extents are at least 1
///
/// # Examples
///
/// ```
/// # use gridsketch::text::{measure, TextMetrics};
/// assert_eq!(measure("hello world", 5), TextMetrics { width: 5, height: 2 });
/// ```
pub fn measure(text: &str, max_width: usize) -> TextMetrics {
    let lines = wrap(text, max_width);
    TextMetrics {
        width: lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1),
        height: lines.len().max(1),
    }
}
