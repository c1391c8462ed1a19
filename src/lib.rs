//! netkit-overlay - live syntax highlighting and regex match overlays
//!
//! Annotates user text (structured data, path queries, templates,
//! scripting code, regex patterns) with classified spans on every edit,
//! and previews regex matches against subject text. Every entry point
//! accepts malformed input: the worst case is escaped, unclassified text.
//!
//! ```
//! use netkit_overlay::{highlight, tokenize, Mode};
//!
//! let html = tokenize(Mode::StructuredData, "{\"a\":1}");
//! assert!(html.contains("syn-number"));
//!
//! let report = highlight("GigabitEthernet0/0", "(?i)Gig");
//! assert_eq!(report.status, "1 match highlighted in real-time.");
//! ```

pub mod ansi;
pub mod config;
pub mod error;
pub mod markup;
pub mod matcher;
pub mod overlay;
pub mod syntax;

pub use ansi::render_ansi;
pub use config::{Config, Theme};
pub use error::{HighlightError, Result};
pub use matcher::{highlight, LiveMatcher, MatchRange, MatchReport};
pub use overlay::{CodeRenderer, MatchRenderer, Overlay, ScrollOffset, Surface};
pub use syntax::{regex_pattern_spans, tokenize_regex_pattern, Mode, Span, SyntaxRegistry, TokenType};

/// Classify `text` in `mode` and render it as escaped markup
pub fn tokenize(mode: Mode, text: &str) -> String {
    SyntaxRegistry::global().tokenize(mode, text)
}

/// Like [`tokenize`], with the mode given by name
///
/// Unknown names fall back to escaping only.
pub fn tokenize_named(name: &str, text: &str) -> String {
    SyntaxRegistry::global().tokenize_named(name, text)
}

/// Classify `text` in `mode` without rendering
pub fn spans(mode: Mode, text: &str) -> Vec<Span> {
    SyntaxRegistry::global().spans(mode, text)
}
