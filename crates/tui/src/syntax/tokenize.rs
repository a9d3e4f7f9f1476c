//! Line tokenizer: escape, scan the rule table, classify.
//!
//! Responsibilities:
//! - Escape markup-significant characters before any rule runs.
//! - Produce a full, non-overlapping token cover of each line in one pass
//!   (earliest match wins, rule order breaks ties).
//!
//! Does NOT handle:
//! - Rule definitions (see `rules`).
//! - Span styling or markup emission (see `highlight` and `markup`).
//!
//! Invariants:
//! - Tokens cover the escaped line exactly: contiguous, in order, no
//!   overlaps, gaps emitted as `Text`.
//! - Escaping happens exactly once, before matching; rules therefore see
//!   `&lt;`, `&gt;` and `&amp;` instead of raw `<`, `>`, `&`.

use super::rules::{Rule, rules_for};
use super::token::{Token, TokenKind};

/// Replace `&`, `<` and `>` with their HTML entities. Ampersand first so
/// the entities this pass inserts are not themselves re-escaped.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inverse of [`escape_markup`] for terminal rendering. Entities last so
/// `&amp;lt;` round-trips to `&lt;` and not `<`.
pub fn unescape_markup(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Earliest non-empty token this rule yields at or after `pos`.
///
/// Returns (match_start, token_start, token_end). Empty captures advance
/// one byte and retry so a degenerate pattern cannot stall the scan.
fn earliest_match(rule: &Rule, line: &str, pos: usize) -> Option<(usize, usize, usize)> {
    let mut from = pos;
    while from <= line.len() {
        let caps = rule.regex.captures_at(line, from)?;
        let whole = caps.get(0)?;
        let token = caps.get(rule.group)?;
        if token.start() < token.end() {
            return Some((whole.start(), token.start(), token.end()));
        }
        let mut next = whole.start() + 1;
        while next < line.len() && !line.is_char_boundary(next) {
            next += 1;
        }
        from = next;
    }
    None
}

/// Tokenize an already-escaped line with the rule table for `language`.
pub fn tokenize(escaped: &str, language: &str) -> Vec<Token> {
    let rules = rules_for(language);
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < escaped.len() {
        let mut best: Option<(usize, usize, usize, TokenKind)> = None;
        for rule in rules {
            if let Some((match_start, start, end)) = earliest_match(rule, escaped, pos) {
                // Strictly-earlier wins; at the same token start, the first
                // rule in table order keeps its claim.
                let better = match best {
                    None => true,
                    Some((_, best_start, _, _)) => start < best_start,
                };
                if better {
                    best = Some((match_start, start, end, rule.kind));
                }
            }
        }
        match best {
            Some((_, start, end, kind)) => {
                if start > pos {
                    tokens.push(Token {
                        kind: TokenKind::Text,
                        start: pos,
                        end: start,
                    });
                }
                tokens.push(Token { kind, start, end });
                pos = end;
            }
            None => {
                tokens.push(Token {
                    kind: TokenKind::Text,
                    start: pos,
                    end: escaped.len(),
                });
                break;
            }
        }
    }

    tokens
}
