//! Regex pattern tokenizer
//!
//! Regex syntax has variable-length tokens with their own delimiters
//! (classes, bounded quantifiers, group openers), so it is scanned by
//! hand instead of through a rule table. The scan is a single forward
//! walk; every byte of the pattern lands in exactly one span.

use super::style::{push_span, Span};
use super::tokens::TokenType;
use crate::markup;

/// Special group openers, longest first where they share a prefix
const GROUP_PREFIXES: [&str; 7] = ["(?<=", "(?<!", "(?=", "(?!", "(?:", "(?P<", "(?<"];

/// Classify a regex pattern into contiguous spans
pub fn regex_pattern_spans(pattern: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < pattern.len() {
        let (len, token) = scan_token(&pattern[pos..]);
        push_span(&mut spans, Span::new(pos, pos + len, token));
        pos += len;
    }

    spans
}

/// Classify a regex pattern and render it as escaped markup
pub fn tokenize_regex_pattern(pattern: &str) -> String {
    markup::render_html(pattern, &regex_pattern_spans(pattern))
}

/// Length and class of the token at the start of `rest` (never empty)
fn scan_token(rest: &str) -> (usize, TokenType) {
    let Some(ch) = rest.chars().next() else {
        return (0, TokenType::Default);
    };

    match ch {
        '\\' => (escape_len(rest), TokenType::Escape),
        '[' => (class_len(rest), TokenType::Class),
        '{' => match bounded_quantifier_len(rest) {
            Some(len) => (len, TokenType::Quantifier),
            None => (1, TokenType::Default),
        },
        '(' => {
            let len = GROUP_PREFIXES
                .iter()
                .find(|prefix| rest.starts_with(*prefix))
                .map_or(1, |prefix| prefix.len());
            (len, TokenType::Group)
        }
        ')' => (1, TokenType::Group),
        '^' | '$' => (1, TokenType::Anchor),
        '*' | '+' | '?' => (1, TokenType::Quantifier),
        '|' | '.' => (1, TokenType::RegexOperator),
        _ => (ch.len_utf8(), TokenType::Default),
    }
}

/// A backslash and the one character it escapes
fn escape_len(rest: &str) -> usize {
    let mut chars = rest.chars();
    chars.next();
    1 + chars.next().map_or(0, char::len_utf8)
}

/// From `[` through the first unescaped `]`, or to the end if unterminated
fn class_len(rest: &str) -> usize {
    let mut chars = rest.char_indices().skip(1);
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            ']' => return idx + 1,
            _ => {}
        }
    }
    rest.len()
}

/// `{m}`, `{m,}` or `{m,n}` with an optional lazy `?`
fn bounded_quantifier_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits_at = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 1;
    let min = digits_at(end);
    if min == 0 {
        return None;
    }
    end += min;
    if bytes.get(end) == Some(&b',') {
        end += 1;
        end += digits_at(end);
    }
    if bytes.get(end) != Some(&b'}') {
        return None;
    }
    end += 1;
    if bytes.get(end) == Some(&b'?') {
        end += 1;
    }
    Some(end)
}
