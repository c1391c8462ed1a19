//! Pattern rules for syntax highlighting
//!
//! A rule pairs an anchored regex with the token type it assigns.
//! Rules only ever look at the start of the remaining text.

use regex::Regex;
use super::tokens::TokenType;

/// Capture group that marks the token when a rule needs trailing context
const TOKEN_GROUP: &str = "tok";

/// A single prefix-matching rule
///
/// The pattern is anchored to the start of the text it is given. If the
/// pattern defines a `(?P<tok>...)` group, the token ends where that group
/// ends and the rest of the match is context only (e.g. a function name
/// that must be followed by `(`).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled, anchored regex pattern
    pub pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
    /// Whether the pattern defines the `tok` group
    has_token_group: bool,
}

impl PatternRule {
    /// Create a new pattern rule
    ///
    /// Returns `None` (and logs) if the pattern does not compile.
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Option<Self> {
        let anchored = format!(r"\A(?:{pattern})");
        match Regex::new(&anchored) {
            Ok(regex) => {
                let has_token_group = regex
                    .capture_names()
                    .any(|group| group == Some(TOKEN_GROUP));
                Some(Self {
                    name: name.to_string(),
                    pattern: regex,
                    token_type,
                    has_token_group,
                })
            }
            Err(err) => {
                tracing::warn!(rule = name, error = %err, "dropping rule with invalid pattern");
                None
            }
        }
    }

    /// Length in bytes of the token this rule matches at the start of `rest`
    ///
    /// Empty matches count as a miss so that every hit makes progress.
    pub fn match_prefix(&self, rest: &str) -> Option<usize> {
        let len = if self.has_token_group {
            let caps = self.pattern.captures(rest)?;
            match caps.name(TOKEN_GROUP) {
                Some(tok) => tok.end(),
                None => caps.get(0)?.end(),
            }
        } else {
            self.pattern.find(rest)?.end()
        };
        (len > 0).then_some(len)
    }
}
