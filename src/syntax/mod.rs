//! Syntax classification
//!
//! This module provides:
//! - Table-driven tokenizing for the editor grammars
//! - A hand-scanned tokenizer for regex patterns
//! - Span and style types shared with the renderers

mod style;
mod tokens;
mod rules;
mod mode;
mod language;
mod registry;
mod regex_pattern;
mod builtin;

pub use style::{Color, Span, Style};
pub use tokens::TokenType;
pub use rules::PatternRule;
pub use mode::{Mode, UnknownMode};
pub use language::LanguageDefinition;
pub use registry::SyntaxRegistry;
pub use regex_pattern::{regex_pattern_spans, tokenize_regex_pattern};

pub(crate) use style::push_span;
