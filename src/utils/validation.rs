/// Reduces a free-text label to characters that are safe inside a filename.
///
/// Keeps ASCII alphanumerics, spaces, hyphens and underscores, trims
/// trailing whitespace, then turns each run of spaces into one underscore.
/// Runs collapse on purpose: `"a  b"` gives `a_b`, and `"Café @ Home!"`
/// gives `Caf_Home` rather than `Caf__Home`.
/// Path separators and dots never survive, so the result cannot escape the
/// upload directory.
pub fn sanitize_label(label: &str) -> String {
    let kept: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, ' ' | '-' | '_'))
        .collect();

    let mut sanitized = String::with_capacity(kept.len());
    let mut in_space_run = false;
    for c in kept.trim_end().chars() {
        if c == ' ' {
            if !in_space_run {
                sanitized.push('_');
            }
            in_space_run = true;
        } else {
            sanitized.push(c);
            in_space_run = false;
        }
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_special_characters() {
        assert_eq!(sanitize_label("Café @ Home!"), "Caf_Home");
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(sanitize_label("Test 1"), "Test_1");
        assert_eq!(sanitize_label("a  b"), "a_b");
        assert_eq!(sanitize_label("a   b"), "a_b");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(sanitize_label("receipt   "), "receipt");
        assert_eq!(sanitize_label("receipt !"), "receipt");
    }

    #[test]
    fn test_hyphens_and_underscores_kept() {
        assert_eq!(sanitize_label("my-label_v2"), "my-label_v2");
    }

    #[test]
    fn test_path_traversal_removed() {
        let sanitized = sanitize_label("../../etc/passwd");
        assert_eq!(sanitized, "etcpasswd");
        assert!(!sanitized.contains('/'));
        assert!(!sanitized.contains('.'));
        assert_eq!(sanitize_label("..\\windows\\system32"), "windowssystem32");
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(sanitize_label("标签"), "");
        assert_eq!(sanitize_label("!!!"), "");
    }
}
