use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max_width` display cells, ending in an ellipsis
/// when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Display-cell prefix of `text`, without an ellipsis.
pub fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            return &text[..idx];
        }
        used += w;
    }
    text
}
