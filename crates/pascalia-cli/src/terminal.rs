// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the Pascalia CLI.

use std::env;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Widths are counted in characters, so diacritics in feast names take one
/// column each. Continuation lines are indented by `indent` spaces.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation of continuation lines
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available = width.saturating_sub(indent);
    if available < 10 {
        return text.to_string();
    }

    let pad = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > available {
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
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(&format!("\n{}", pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_to_width("Buna Vestire", 4, 80), "Buna Vestire");
    }

    #[test]
    fn test_wrap_long_text_indents_continuations() {
        let text = "Tăierea capului Sf. Ioan Botezătorul";
        let wrapped = wrap_to_width(text, 2, 22);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 22, "line too long: {:?}", line);
        }
        assert!(wrapped.lines().skip(1).all(|l| l.starts_with("  ")));
        assert_eq!(wrapped.split_whitespace().collect::<Vec<_>>().join(" "), text);
    }

    #[test]
    fn test_wrap_narrow_terminal_returns_text() {
        assert_eq!(wrap_to_width("a b c", 5, 12), "a b c");
    }
}
