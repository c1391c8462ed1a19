//! Rule registry and mode dispatch
//!
//! The SyntaxRegistry owns one rule table per rule-driven mode. Tables
//! are built once and never mutated afterwards; lookups hand out shared
//! slices.

use std::sync::OnceLock;

use super::builtin;
use super::language::{tokenize_with, LanguageDefinition};
use super::mode::Mode;
use super::regex_pattern;
use super::rules::PatternRule;
use super::style::Span;
use crate::markup;

/// Per-mode rule tables
pub struct SyntaxRegistry {
    /// Loaded language definitions, at most one per mode
    languages: Vec<LanguageDefinition>,
}

impl SyntaxRegistry {
    /// Create a registry holding the built-in tables
    pub fn new() -> Self {
        let mut registry = Self {
            languages: Vec::new(),
        };

        for lang in builtin::all_languages() {
            registry.add_language(lang);
        }

        registry
    }

    /// The process-wide registry, built on first use
    pub fn global() -> &'static SyntaxRegistry {
        static REGISTRY: OnceLock<SyntaxRegistry> = OnceLock::new();
        REGISTRY.get_or_init(SyntaxRegistry::new)
    }

    /// Add a language definition, replacing any table for the same mode
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        self.languages.retain(|existing| existing.mode != lang.mode);
        self.languages.push(lang);
    }

    /// Get the definition for a mode
    pub fn get_language(&self, mode: Mode) -> Option<&LanguageDefinition> {
        self.languages.iter().find(|lang| lang.mode == mode)
    }

    /// Ordered rules for a mode; empty for modes without a table
    pub fn rules_for(&self, mode: Mode) -> &[PatternRule] {
        self.get_language(mode)
            .map(|lang| lang.patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Classify `text` in `mode`
    ///
    /// The result always covers the whole input. Modes with no table
    /// produce a single unclassified span.
    pub fn spans(&self, mode: Mode, text: &str) -> Vec<Span> {
        match mode {
            Mode::Regex => regex_pattern::regex_pattern_spans(text),
            _ => tokenize_with(self.rules_for(mode), text),
        }
    }

    /// Classify `text` in `mode` and render escaped markup
    pub fn tokenize(&self, mode: Mode, text: &str) -> String {
        match mode {
            Mode::Plain => markup::escape_html(text).into_owned(),
            _ => markup::render_html(text, &self.spans(mode, text)),
        }
    }

    /// Like [`tokenize`](Self::tokenize), looking the mode up by tag
    ///
    /// An unknown tag degrades to escape-only output.
    pub fn tokenize_named(&self, name: &str, text: &str) -> String {
        match Mode::from_name(name) {
            Some(mode) => self.tokenize(mode, text),
            None => {
                tracing::debug!(mode = name, "unknown mode, rendering escaped text only");
                markup::escape_html(text).into_owned()
            }
        }
    }

    /// List modes that have a rule table
    pub fn list_modes(&self) -> Vec<Mode> {
        Mode::ALL
            .into_iter()
            .filter(|mode| self.get_language(*mode).is_some())
            .collect()
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenType;

    const SAMPLES: &[&str] = &[
        "",
        "{\"hostname\": \"R1\", \"asn\": 65001, \"up\": true}",
        "//interface[name='Lo0']/ipv4/address/ip/text()",
        "interfaces[?enabled && counters.in_errors > `0`].{n:name}",
        "Value IP (\\d+\\.\\d+)\n\nStart\n  ^${IP} -> Record",
        "<group name=\"x\">\ninterface {{ name | ORPHRASE }}\n</group>",
        "{% for i in xs %}{{ i }}{% endfor %} <b>&amp;</b>",
        "def f(x):\n    return [i for i in x if i > 0]  # done",
        "(?ms)^interface\\s+(\\S+)\\n[a-z\\]]{2,3}?(?<name>x)|.*$",
        "unterminated \"string and [class and (group",
        "ünïcödé → 漢字 \\",
    ];

    #[test]
    fn test_every_rule_driven_mode_has_a_table() {
        let registry = SyntaxRegistry::new();
        for mode in Mode::ALL {
            assert_eq!(registry.get_language(mode).is_some(), mode.is_rule_driven(), "{mode}");
        }
        assert!(registry.rules_for(Mode::Plain).is_empty());
        assert!(!registry.rules_for(Mode::PathQuery).is_empty());
    }

    #[test]
    fn test_spans_cover_input_for_all_modes() {
        let registry = SyntaxRegistry::global();
        for mode in Mode::ALL {
            for text in SAMPLES {
                let spans = registry.spans(mode, text);
                let mut pos = 0;
                for span in &spans {
                    assert_eq!(span.start, pos, "{mode}: {text:?}");
                    assert!(span.end >= span.start);
                    pos = span.end;
                }
                assert_eq!(pos, text.len(), "{mode}: {text:?}");
            }
        }
    }

    #[test]
    fn test_stripping_markup_reconstructs_input() {
        let registry = SyntaxRegistry::global();
        for mode in Mode::ALL {
            for text in SAMPLES {
                let html = registry.tokenize(mode, text);
                assert_eq!(markup::to_plain_text(&html), *text, "{mode}");
            }
        }
    }

    #[test]
    fn test_output_never_contains_raw_user_markup() {
        let registry = SyntaxRegistry::global();
        for mode in Mode::ALL {
            let html = registry.tokenize(mode, "<script>alert(1)</script>");
            assert!(!html.contains("<script>"), "{mode}");
        }
    }

    #[test]
    fn test_structured_data_example() {
        let spans = SyntaxRegistry::global().spans(Mode::StructuredData, "{\"a\":1}");
        let tokens: Vec<TokenType> = spans.iter().map(|s| s.token).collect();
        assert_eq!(
            tokens,
            vec![
                TokenType::Operator,
                TokenType::String,
                TokenType::Operator,
                TokenType::Number,
                TokenType::Operator,
            ]
        );
    }

    #[test]
    fn test_unknown_mode_is_escape_only() {
        let registry = SyntaxRegistry::global();
        assert_eq!(registry.tokenize_named("cobol", "a < b"), "a &lt; b");
        assert_eq!(registry.tokenize_named("plain", "\"x\""), "&quot;x&quot;");
        assert_eq!(registry.tokenize_named("json", "1"), r#"<span class="syn-number">1</span>"#);
    }

    #[test]
    fn test_list_modes() {
        let modes = SyntaxRegistry::new().list_modes();
        assert_eq!(modes.len(), 8);
        assert!(!modes.contains(&Mode::Regex));
    }
}
