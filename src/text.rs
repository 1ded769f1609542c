//! Line wrapping for report text

use crate::font::FontMetrics;
use tracing::trace;

/// Break text into lines no wider than `max_width` points.
///
/// Words are kept whole unless a single word is wider than the line, in which
/// case it is split on character boundaries.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let space_width = metrics.char_width(' ', font_size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = metrics.text_width(word, font_size);

        if !current.is_empty() && current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Over-long word: emit full-width chunks, keep the tail open
            let mut chunk_width = 0.0;
            for ch in word.chars() {
                let w = metrics.char_width(ch, font_size);
                if !current.is_empty() && chunk_width + w > max_width {
                    lines.push(std::mem::take(&mut current));
                    chunk_width = 0.0;
                }
                current.push(ch);
                chunk_width += w;
            }
            current_width = chunk_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    trace!("Wrapped text into {} lines", lines.len());
    lines
}
