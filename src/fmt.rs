//! Shared formatting helpers for table cells, popups and CLI output.
//!
//! Pure functions only; no ratatui styles live here.

/// Format an integer with `,` thousands separators (`2240000` -> `"2,240,000"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Returns `"s"` when `count` calls for a plural noun.
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Truncate string to `max_chars` characters with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Normalize text for single-line display.
/// Replaces newlines and tabs with spaces and collapses runs of spaces.
pub fn normalize_for_display(s: &str) -> String {
    let s = s.replace('\n', " ").replace('\r', "").replace('\t', " ");
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                result.push(ch);
            }
            prev_space = true;
        } else {
            result.push(ch);
            prev_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(390), "390");
        assert_eq!(format_thousands(2900), "2,900");
        assert_eq!(format_thousands(2_240_000), "2,240,000");
        assert_eq!(format_thousands(100_000), "100,000");
    }

    #[test]
    fn plural() {
        assert_eq!(plural_suffix(1), "");
        assert_eq!(plural_suffix(0), "s");
        assert_eq!(plural_suffix(3), "s");
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("ääää", 3), "ää…");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_for_display("a\n\tb   c"), "a b c");
    }
}
