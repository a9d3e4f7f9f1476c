//! Regex-rule syntax highlighting.
//!
//! Lines are escaped once, tokenized into a full non-overlapping cover,
//! and then rendered either as styled terminal spans or as HTML markup.

mod highlight;
mod markup;
mod rules;
mod token;
mod tokenize;

pub use highlight::highlight_line;
pub use markup::line_to_markup;
pub use token::{Token, TokenKind};
pub use tokenize::{escape_markup, tokenize, unescape_markup};
