//! HTML escaping for template rendering.

/// Escape HTML special characters for safe rendering. Single quotes are
/// escaped too since user text ends up inside attribute values
/// (the copy-to-clipboard `data-copy` payloads).
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(html_escape("plain summary"), "plain summary");
        assert_eq!(html_escape("<b>France</b>"), "&lt;b&gt;France&lt;/b&gt;");
        assert_eq!(html_escape("AT&T"), "AT&amp;T");
    }

    #[test]
    fn test_escapes_attribute_delimiters() {
        assert_eq!(
            html_escape(r#"summary with "quotes" and 'apostrophes'"#),
            "summary with &quot;quotes&quot; and &#39;apostrophes&#39;"
        );
    }
}
