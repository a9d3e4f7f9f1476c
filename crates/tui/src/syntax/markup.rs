//! HTML markup emission for the export path.
//!
//! Token text is already escaped, so it is emitted verbatim; only the
//! span wrappers are added here.

use super::tokenize::{escape_markup, tokenize};

/// Render one source line as HTML with `tok-*` class spans. Unclassified
/// text is emitted bare. An empty line produces an empty string.
pub fn line_to_markup(line: &str, language: &str) -> String {
    let escaped = escape_markup(line);
    let mut out = String::with_capacity(escaped.len());
    for token in tokenize(&escaped, language) {
        let text = &escaped[token.start..token.end];
        match token.kind.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</span>");
            }
            None => out.push_str(text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes_script_tags() {
        let markup = line_to_markup("<script>alert(1)</script>", "html");
        assert!(markup.contains("&lt;script"));
        assert!(markup.contains("&lt;/script"));
        assert!(!markup.contains("<script"));
    }

    #[test]
    fn test_ts_string_and_comment_do_not_overlap() {
        let markup = line_to_markup("const s = \"// nope\"; // real", "ts");
        assert!(markup.contains("<span class=\"tok-string\">\"// nope\"</span>"));
        assert!(markup.contains("<span class=\"tok-comment\">// real</span>"));
    }

    #[test]
    fn test_plain_text_emitted_bare() {
        let markup = line_to_markup("plain words only", "ts");
        assert!(!markup.contains("<span"));
        assert_eq!(markup, "plain words only");
    }

    #[test]
    fn test_empty_line_is_empty_string() {
        assert_eq!(line_to_markup("", "js"), "");
    }

    #[test]
    fn test_keyword_span_class() {
        let markup = line_to_markup("import db", "py");
        assert!(markup.contains("<span class=\"tok-keyword\">import</span>"));
    }
}
