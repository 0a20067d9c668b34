//! Post-processing of rendered text.

/// Collapse runs of blank lines.
///
/// A blank (whitespace-only) line is kept only when it follows a non-blank
/// line, so leading blank lines are dropped and every run of blank lines
/// shrinks to at most one.
///
/// # Examples
///
/// ```
/// # use cyphering::render::render_clean;
/// assert_eq!(render_clean("\n\na\n\n\n\nb\n"), "a\n\nb\n");
/// ```
pub fn render_clean(text: &str) -> String {
    let mut cleaned: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        let previous_is_content = cleaned.last().is_some_and(|last| !last.trim().is_empty());
        if !line.trim().is_empty() || previous_is_content {
            cleaned.push(line);
        }
    }
    cleaned.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_clean_collapses_runs() {
        assert_eq!(render_clean("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_render_clean_drops_leading_blank_lines() {
        assert_eq!(render_clean("\n  \n\t\nMATCH (n)"), "MATCH (n)");
    }

    #[test]
    fn test_render_clean_whitespace_only_lines_are_blank() {
        assert_eq!(render_clean("a\n   \n \t \nb"), "a\n   \nb");
    }

    #[test]
    fn test_render_clean_keeps_single_trailing_newline() {
        assert_eq!(render_clean("a;\n"), "a;\n");
        assert_eq!(render_clean("a;\n\n\n"), "a;\n");
    }

    #[test]
    fn test_render_clean_empty() {
        assert_eq!(render_clean(""), "");
        assert_eq!(render_clean("\n\n"), "");
    }
}
