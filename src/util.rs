//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
///
/// Works on display width rather than bytes or chars so CJK and emoji
/// character names line up in card rows.
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        end = i + c.len_utf8();
    }
    format!("{}…", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_unchanged() {
        assert_eq!(truncate_display("Rick Sanchez", 20), "Rick Sanchez");
    }

    #[test]
    fn test_exact_fit_unchanged() {
        assert_eq!(truncate_display("Rick", 4), "Rick");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_display("Abradolf Lincler", 9), "Abradolf…");
    }

    #[test]
    fn test_wide_characters_counted_by_columns() {
        // Each CJK char is two columns wide
        let truncated = truncate_display("日本語日本語", 5);
        assert_eq!(truncated, "日本…");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(truncate_display("", 5), "");
    }
}
