use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to fit `max_width` columns, ending in `…` when anything was
/// dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Replace every character with `mask`, keeping the character count.
pub fn mask(s: &str, mask: char) -> String {
    s.chars().map(|_| mask).collect()
}
