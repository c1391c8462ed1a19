//! Live regex match highlighting
//!
//! Applies a user pattern to subject text and renders the subject with
//! every match wrapped, alternating between two classes so adjacent
//! matches stay distinguishable. Malformed patterns never escape as
//! errors: they become a status line over the escaped, unmarked text.

mod flags;

pub use flags::InlineFlags;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::markup;
use crate::syntax::{push_span, Span, TokenType};

const STATUS_EMPTY_PATTERN: &str = "Enter a pattern to preview matches.";
const STATUS_NO_MATCHES: &str = "No matches yet.";

/// A half-open byte range of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRange {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the match (equal to `start` when empty)
    pub end: usize,
}

impl MatchRange {
    /// Check if this is a zero-length match
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of one live highlight pass
///
/// Serializes as `{ "ok", "html", "status", "matches" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// False only when the pattern failed to compile
    pub ok: bool,
    /// Escaped subject, with match wrappers when there are matches
    pub html: String,
    /// One-line human readable summary
    pub status: String,
    /// Matches in subject order
    pub matches: Vec<MatchRange>,
}

impl MatchReport {
    fn plain(subject: &str, ok: bool, status: impl Into<String>) -> Self {
        Self {
            ok,
            html: markup::escape_html(subject).into_owned(),
            status: status.into(),
            matches: Vec::new(),
        }
    }
}

/// A compiled user pattern
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The pattern without its flag prefix
    pub regex: Regex,
    /// Flags taken from the prefix
    pub flags: InlineFlags,
}

/// Match enumeration outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    pub ranges: Vec<MatchRange>,
    /// Enumeration stopped at the configured cap
    pub truncated: bool,
}

/// Live match engine
#[derive(Debug, Clone, Default)]
pub struct LiveMatcher {
    config: EngineConfig,
}

impl LiveMatcher {
    /// Create a matcher with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with explicit limits
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the limits this matcher compiles and searches with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Strip inline flags and compile the rest of the pattern
    pub fn compile(&self, raw_pattern: &str) -> Result<CompiledPattern> {
        let (flags, source) = InlineFlags::parse(raw_pattern);
        // `&str` matching needs Unicode mode; the `u` flag is implied
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .unicode(true)
            .size_limit(self.config.size_limit)
            .dfa_size_limit(self.config.dfa_size_limit)
            .build()?;
        Ok(CompiledPattern { regex, flags })
    }

    /// Enumerate non-overlapping matches left to right
    ///
    /// Each search resumes at the previous match end. After an empty
    /// match the next search starts one character later, so the loop
    /// yields at most `subject.chars().count() + 1` matches.
    pub fn find_matches(&self, pattern: &CompiledPattern, subject: &str) -> MatchSet {
        let mut set = MatchSet::default();
        let mut pos = 0;

        while pos <= subject.len() {
            let Some(found) = pattern.regex.find_at(subject, pos) else {
                break;
            };
            if pattern.flags.sticky && found.start() != pos {
                break;
            }
            if self.config.max_matches.is_some_and(|cap| set.ranges.len() >= cap) {
                set.truncated = true;
                break;
            }

            set.ranges.push(MatchRange {
                start: found.start(),
                end: found.end(),
            });

            if found.is_empty() {
                match subject[found.end()..].chars().next() {
                    Some(ch) => pos = found.end() + ch.len_utf8(),
                    None => break,
                }
            } else {
                pos = found.end();
            }
        }

        set
    }

    /// Highlight every match of `raw_pattern` in `subject`
    pub fn highlight(&self, subject: &str, raw_pattern: &str) -> MatchReport {
        if raw_pattern.trim().is_empty() {
            return MatchReport::plain(subject, true, STATUS_EMPTY_PATTERN);
        }

        let pattern = match self.compile(raw_pattern) {
            Ok(pattern) => pattern,
            Err(err) => {
                tracing::debug!(error = %err, "live pattern failed to compile");
                return MatchReport::plain(subject, false, format!("Pattern error: {err}"));
            }
        };

        let set = self.find_matches(&pattern, subject);
        if set.ranges.is_empty() {
            return MatchReport::plain(subject, true, STATUS_NO_MATCHES);
        }
        if set.truncated {
            tracing::debug!(matches = set.ranges.len(), "live match enumeration truncated");
        }

        let count = set.ranges.len();
        let mut status = format!(
            "{count} match{} highlighted in real-time.",
            if count == 1 { "" } else { "es" }
        );
        if set.truncated {
            status.push_str(" Stopped at the match limit.");
        }

        MatchReport {
            ok: true,
            html: markup::render_html(subject, &match_spans(subject, &set.ranges)),
            status,
            matches: set.ranges,
        }
    }
}

/// Highlight with the default limits
pub fn highlight(subject: &str, raw_pattern: &str) -> MatchReport {
    LiveMatcher::new().highlight(subject, raw_pattern)
}

/// Interleave unclassified gaps with alternating match spans
fn match_spans(subject: &str, ranges: &[MatchRange]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut next_start = 0;

    for (idx, range) in ranges.iter().enumerate() {
        push_span(&mut spans, Span::plain(next_start, range.start));
        let token = if idx % 2 == 0 {
            TokenType::MatchPrimary
        } else {
            TokenType::MatchAlternate
        };
        // Pushed directly: empty matches must survive as spans
        spans.push(Span::new(range.start, range.end, token));
        next_start = range.end;
    }
    push_span(&mut spans, Span::plain(next_start, subject.len()));

    spans
}
