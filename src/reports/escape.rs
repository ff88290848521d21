//! Escaping utilities for report text.
//!
//! Reviewer names and summaries come straight from the input file and may
//! contain Markdown syntax or control characters that break table layout.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// # Examples
///
/// ```
/// use review_scorer::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("good | bad"), "good \\| bad");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an optional value for a Markdown table cell, `-` when absent.
pub fn escape_md_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "-".to_string(), escape_markdown_table)
}

/// Flatten whitespace and cut `s` to at most `max` characters for a
/// fixed-width terminal column. Truncated text ends in `…`.
pub fn truncate_cell(s: &str, max: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let mut out: String = flat.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table_escaping() {
        assert_eq!(escape_markdown_table("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
        assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
    }

    #[test]
    fn test_optional_cell() {
        assert_eq!(escape_md_opt(None), "-");
        assert_eq!(escape_md_opt(Some("x|y")), "x\\|y");
    }

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("short", 10), "short");
        assert_eq!(truncate_cell("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_cell("much too long text", 8), "much to…");
        assert_eq!(truncate_cell("tab\there", 20), "tab here");
    }
}
