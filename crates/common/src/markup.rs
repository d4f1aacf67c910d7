/// Escapes text for inclusion in raw markup. Covers the usual four plus
/// quote and slash, since escaped strings also end up inside attribute
/// values and anchor hrefs.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Comment bodies are plain text but keep their line breaks. Escape first,
/// then turn newlines into `<br>` so the result is safe for `inner_html`.
pub fn comment_body_html(body: &str) -> String {
    escape_html(body).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"&<>"'/"#),
            "&amp;&lt;&gt;&quot;&#39;&#x2F;"
        );
    }

    #[test]
    fn script_payload_contains_no_raw_angle_brackets() {
        let escaped = escape_html("<img src=x onerror=alert(1)>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;img src=x onerror=alert(1)&gt;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("こんにちは world"), "こんにちは world");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn body_keeps_line_breaks_without_injecting_markup() {
        assert_eq!(
            comment_body_html("line one\n<b>bold?</b>"),
            "line one<br>&lt;b&gt;bold?&lt;&#x2F;b&gt;"
        );
    }
}
