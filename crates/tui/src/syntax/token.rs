//! Token classification for the syntax highlighter.

use folio_content::Theme;
use ratatui::style::{Color, Style};

/// Classified region of a source line.
///
/// `Text` is the catch-all for regions no rule claimed; it renders in the
/// default text color and is emitted bare (no span) in markup output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Keyword,
    Function,
    Type,
    /// Well-known framework identifiers (React hooks and the like).
    Builtin,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Decorator,
    Tag,
    Attribute,
    /// CSS property names.
    Property,
}

impl TokenKind {
    /// Foreground color for terminal rendering.
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            TokenKind::Text => theme.text,
            TokenKind::Keyword => theme.syntax_keyword,
            TokenKind::Function => theme.syntax_function,
            TokenKind::Type => theme.syntax_type,
            TokenKind::Builtin => theme.info,
            TokenKind::String => theme.syntax_string,
            TokenKind::Number => theme.syntax_number,
            TokenKind::Comment => theme.syntax_comment,
            TokenKind::Operator => theme.syntax_operator,
            TokenKind::Punctuation => theme.syntax_punctuation,
            TokenKind::Decorator => theme.syntax_decorator,
            TokenKind::Tag => theme.syntax_tag,
            TokenKind::Attribute => theme.syntax_attribute,
            TokenKind::Property => theme.syntax_tag,
        }
    }

    pub fn style(self, theme: &Theme) -> Style {
        Style::default().fg(self.color(theme))
    }

    /// CSS class for HTML export. `Text` has none.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::Text => None,
            TokenKind::Keyword => Some("tok-keyword"),
            TokenKind::Function => Some("tok-function"),
            TokenKind::Type => Some("tok-type"),
            TokenKind::Builtin => Some("tok-builtin"),
            TokenKind::String => Some("tok-string"),
            TokenKind::Number => Some("tok-number"),
            TokenKind::Comment => Some("tok-comment"),
            TokenKind::Operator => Some("tok-operator"),
            TokenKind::Punctuation => Some("tok-punct"),
            TokenKind::Decorator => Some("tok-decorator"),
            TokenKind::Tag => Some("tok-tag"),
            TokenKind::Attribute => Some("tok-attribute"),
            TokenKind::Property => Some("tok-property"),
        }
    }
}

/// A classified byte range of an escaped source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}
