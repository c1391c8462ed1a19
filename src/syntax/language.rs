//! Language definitions and the table-driven tokenizer
//!
//! A LanguageDefinition is an ordered list of prefix rules for one mode.
//! Tokenizing walks the text once: at each offset the first rule that
//! matches wins, and a full miss emits one unclassified character.

use super::mode::Mode;
use super::rules::PatternRule;
use super::style::{push_span, Span};
use crate::markup;

/// A complete rule table for one mode
pub struct LanguageDefinition {
    /// The mode this table highlights
    pub mode: Mode,
    /// Prefix rules in priority order (first match wins)
    pub patterns: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            patterns: Vec::new(),
        }
    }

    /// Append a pattern rule; it is tried after every rule added before it
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
    }

    /// Classify `text` into contiguous spans covering all of it
    pub fn spans(&self, text: &str) -> Vec<Span> {
        tokenize_with(&self.patterns, text)
    }

    /// Classify `text` and render it as escaped markup
    pub fn tokenize(&self, text: &str) -> String {
        markup::render_html(text, &self.spans(text))
    }
}

/// Run the ordered rules over `text`
pub fn tokenize_with(rules: &[PatternRule], text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = rules
            .iter()
            .find_map(|rule| rule.match_prefix(rest).map(|len| (len, rule.token_type)));

        match hit {
            Some((len, token_type)) => {
                push_span(&mut spans, Span::new(pos, pos + len, token_type));
                pos += len;
            }
            None => {
                // No rule matched - emit one character unclassified
                let width = rest.chars().next().map_or(1, char::len_utf8);
                push_span(&mut spans, Span::plain(pos, pos + width));
                pos += width;
            }
        }
    }

    spans
}
