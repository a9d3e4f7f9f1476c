//! Terminal rendering of tokenized lines.

use folio_content::Theme;
use ratatui::text::{Line, Span};

use super::tokenize::{escape_markup, tokenize, unescape_markup};

/// Highlight one source line into styled spans for the code window.
pub fn highlight_line(line: &str, language: &str, theme: &Theme) -> Line<'static> {
    let escaped = escape_markup(line);
    let mut spans = Vec::new();
    for token in tokenize(&escaped, language) {
        let text = unescape_markup(&escaped[token.start..token.end]);
        if text.is_empty() {
            continue;
        }
        spans.push(Span::styled(text, token.kind.style(theme)));
    }
    Line::from(spans)
}
