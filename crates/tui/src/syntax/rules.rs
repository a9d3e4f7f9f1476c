//! Per-language highlight rule tables.
//!
//! Rules run against lines that have already had `&`, `<` and `>` replaced
//! by their HTML entities, so patterns that care about those characters are
//! written against the escaped forms (`&lt;`, `&gt;`, `&amp;&amp;`).
//!
//! Within a table, order is the tie-break when two rules match at the same
//! position: earlier rules win. Keywords sit above call detection so
//! `return(` classifies as a keyword, and builtins sit above call detection
//! so `useState(` classifies as a builtin rather than a plain call.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::token::TokenKind;

/// One highlight rule. The token covers capture group `group` of the match
/// (0 = the whole match); scanning resumes at the group's end, so trailing
/// context consumed by the pattern is rescanned by later positions.
pub struct Rule {
    pub regex: Regex,
    pub kind: TokenKind,
    pub group: usize,
}

impl Rule {
    fn new(pattern: &str, kind: TokenKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static highlight pattern"),
            kind,
            group: 0,
        }
    }

    fn with_group(pattern: &str, kind: TokenKind, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static highlight pattern"),
            kind,
            group,
        }
    }
}

const JS_KEYWORDS: &str = "(import|export|const|let|var|function|return|from|default|class|extends|async|await|if|else|for|while|try|catch|switch|case|break|continue|new|this|super|typeof|instanceof)";
const TS_KEYWORDS: &str = "(import|export|const|let|var|function|return|from|default|class|extends|implements|async|await|if|else|for|while|try|catch|switch|case|break|continue|new|this|super|typeof|instanceof)";
const TS_TYPE_KEYWORDS: &str =
    "(interface|type|namespace|enum|any|void|string|number|boolean|null|undefined|never|unknown)";
const REACT_HOOKS: &str =
    "(useState|useEffect|useContext|useRef|useReducer|useMemo|useCallback)";
const STRING_PATTERN: &str = "(['\"`].*?['\"`])";
const NUMBER_PATTERN: &str = r"\b(\d+)\b";
const LINE_COMMENT: &str = "(//.*$)";
// Written against escaped text, so `<`, `>` and `&&` appear as entities.
const JS_OPERATORS: &str =
    r"(\+|\-|\*|/|===|==|=|!==|!=|&gt;=|&lt;=|&gt;|&lt;|\?|:|\|\||&amp;&amp;)";
const JS_PUNCTUATION: &str = r"(\{|\}|\(|\)|\[|\]|;|,|\.)";

fn js_rules() -> Vec<Rule> {
    vec![
        Rule::new(JS_KEYWORDS, TokenKind::Keyword),
        Rule::new(REACT_HOOKS, TokenKind::Builtin),
        Rule::with_group(r"(\w+)\s*=", TokenKind::Text, 1),
        Rule::with_group(r"(\w+)\s*\(", TokenKind::Function, 1),
        Rule::new(STRING_PATTERN, TokenKind::String),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(LINE_COMMENT, TokenKind::Comment),
        Rule::new(JS_OPERATORS, TokenKind::Operator),
        Rule::new(JS_PUNCTUATION, TokenKind::Punctuation),
    ]
}

fn jsx_markup_rules() -> Vec<Rule> {
    vec![
        Rule::new(r"(&lt;/?\w+)", TokenKind::Tag),
        Rule::with_group(r"(\w+)=", TokenKind::Attribute, 1),
    ]
}

fn jsx_rules() -> Vec<Rule> {
    let mut rules = jsx_markup_rules();
    rules.extend([
        Rule::new(JS_KEYWORDS, TokenKind::Keyword),
        Rule::new(REACT_HOOKS, TokenKind::Builtin),
        Rule::new(STRING_PATTERN, TokenKind::String),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(LINE_COMMENT, TokenKind::Comment),
    ]);
    rules
}

fn ts_rules() -> Vec<Rule> {
    vec![
        Rule::new(TS_TYPE_KEYWORDS, TokenKind::Type),
        Rule::new(TS_KEYWORDS, TokenKind::Keyword),
        // Annotated name, then the annotation's type after the colon.
        Rule::with_group(r"(\w+)\s*:\s*\w+", TokenKind::Text, 1),
        Rule::with_group(r":\s*(\w+(?:\[\])?)", TokenKind::Type, 1),
        Rule::new(REACT_HOOKS, TokenKind::Builtin),
        Rule::with_group(r"(\w+)\s*\(", TokenKind::Function, 1),
        Rule::new(STRING_PATTERN, TokenKind::String),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(LINE_COMMENT, TokenKind::Comment),
    ]
}

fn tsx_rules() -> Vec<Rule> {
    let mut rules = jsx_markup_rules();
    rules.extend(ts_rules());
    rules
}

fn py_rules() -> Vec<Rule> {
    vec![
        Rule::new("(def|class|import|from|as|return|if|elif|else|for|while|try|except|finally|with|in|is|not|and|or|True|False|None|lambda|async|await|yield)", TokenKind::Keyword),
        Rule::new(r"(@\w+)", TokenKind::Decorator),
        Rule::with_group(r"(\w+)\s*\(", TokenKind::Function, 1),
        Rule::new(STRING_PATTERN, TokenKind::String),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new("(#.*$)", TokenKind::Comment),
    ]
}

fn html_rules() -> Vec<Rule> {
    vec![
        Rule::new("(&lt;!--.*?--&gt;)", TokenKind::Comment),
        Rule::new("(&lt;!DOCTYPE.*?&gt;)", TokenKind::Comment),
        Rule::new(r"(&lt;/?[\w\-]+)", TokenKind::Tag),
        Rule::with_group(r"(\s\w+)=", TokenKind::Attribute, 1),
        Rule::new(STRING_PATTERN, TokenKind::String),
    ]
}

fn css_rules() -> Vec<Rule> {
    vec![
        Rule::new(r"(/\*.*?\*/)", TokenKind::Comment),
        Rule::new(r"([.#][\w\-]+)", TokenKind::Function),
        Rule::with_group(r"([\w\-]+)\s*:", TokenKind::Property, 1),
        Rule::new(r"(:[^;}]*)", TokenKind::String),
        Rule::with_group(r"(\d+)(?:px|em|rem|%|vh|vw|s|ms)", TokenKind::Number, 1),
    ]
}

static RULE_TABLES: LazyLock<HashMap<&'static str, Vec<Rule>>> = LazyLock::new(|| {
    HashMap::from([
        ("js", js_rules()),
        ("jsx", jsx_rules()),
        ("ts", ts_rules()),
        ("tsx", tsx_rules()),
        ("py", py_rules()),
        ("html", html_rules()),
        ("css", css_rules()),
    ])
});

/// Rules for a language tag. Unknown tags fall back to the JavaScript
/// table rather than rendering unhighlighted.
pub fn rules_for(language: &str) -> &'static [Rule] {
    RULE_TABLES
        .get(language)
        .or_else(|| RULE_TABLES.get("js"))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        for language in ["js", "jsx", "ts", "tsx", "py", "html", "css"] {
            assert!(!rules_for(language).is_empty(), "{language} table empty");
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_js() {
        let fallback = rules_for("zig");
        let js = rules_for("js");
        assert_eq!(fallback.len(), js.len());
        assert_eq!(fallback[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_tsx_includes_markup_and_type_rules() {
        let kinds: Vec<TokenKind> = rules_for("tsx").iter().map(|r| r.kind).collect();
        assert!(kinds.contains(&TokenKind::Tag));
        assert!(kinds.contains(&TokenKind::Attribute));
        assert!(kinds.contains(&TokenKind::Type));
        assert!(kinds.contains(&TokenKind::Keyword));
    }
}
