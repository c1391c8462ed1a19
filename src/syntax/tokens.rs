//! Token types for syntax highlighting
//!
//! This module defines the fixed set of classifications a span can
//! carry, their markup class names, and their default terminal styles.

use super::style::{Color, Style};

/// Span classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Quoted string literals
    String,
    /// Numeric literals
    Number,
    /// Reserved words, directives, template blocks
    Keyword,
    /// Operators and punctuation
    Operator,
    /// Comments
    Comment,
    /// Identifiers and element names
    Name,
    /// Template variables (`{{ x }}`, `${X}`)
    Variable,
    /// Regex escapes (`\d`, `\]`)
    Escape,
    /// Regex group delimiters
    Group,
    /// Regex character classes
    Class,
    /// Regex quantifiers
    Quantifier,
    /// Regex anchors
    Anchor,
    /// Regex alternation and wildcard (`|`, `.`)
    RegexOperator,
    /// Even-numbered live match
    MatchPrimary,
    /// Odd-numbered live match
    MatchAlternate,
    /// Unclassified text (rendered without a wrapper)
    Default,
}

impl TokenType {
    /// Every classification, in declaration order
    pub const ALL: [TokenType; 16] = [
        TokenType::String,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Operator,
        TokenType::Comment,
        TokenType::Name,
        TokenType::Variable,
        TokenType::Escape,
        TokenType::Group,
        TokenType::Class,
        TokenType::Quantifier,
        TokenType::Anchor,
        TokenType::RegexOperator,
        TokenType::MatchPrimary,
        TokenType::MatchAlternate,
        TokenType::Default,
    ];

    /// Markup class attribute for this token, `None` for unclassified text
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenType::String => Some("syn-string"),
            TokenType::Number => Some("syn-number"),
            TokenType::Keyword => Some("syn-keyword"),
            TokenType::Operator => Some("syn-operator"),
            TokenType::Comment => Some("syn-comment"),
            TokenType::Name => Some("syn-name"),
            TokenType::Variable => Some("syn-variable"),
            TokenType::Escape => Some("rgx-esc"),
            TokenType::Group => Some("rgx-group"),
            TokenType::Class => Some("rgx-class"),
            TokenType::Quantifier => Some("rgx-quant"),
            TokenType::Anchor => Some("rgx-anchor"),
            TokenType::RegexOperator => Some("rgx-op"),
            TokenType::MatchPrimary => Some("rgx-hit rgx-hit-a"),
            TokenType::MatchAlternate => Some("rgx-hit rgx-hit-b"),
            TokenType::Default => None,
        }
    }

    /// Get the default terminal style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Operator => Style::fg(Color::BrightWhite),
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::Name => Style::fg(Color::Blue),
            TokenType::Variable => Style::fg(Color::BrightCyan),
            TokenType::Escape => Style::fg(Color::BrightYellow),
            TokenType::Group => Style::fg(Color::BrightMagenta),
            TokenType::Class => Style::fg(Color::Yellow),
            TokenType::Quantifier => Style::fg(Color::BrightRed),
            TokenType::Anchor => Style::fg(Color::BrightBlue).with_bold(),
            TokenType::RegexOperator => Style::fg(Color::BrightWhite).with_bold(),
            TokenType::MatchPrimary => Style::bg(Color::Yellow).with_fg(Color::Black),
            TokenType::MatchAlternate => Style::bg(Color::Cyan).with_fg(Color::Black),
            TokenType::Default => Style::default(),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::String => "String",
            TokenType::Number => "Number",
            TokenType::Keyword => "Keyword",
            TokenType::Operator => "Operator",
            TokenType::Comment => "Comment",
            TokenType::Name => "Name",
            TokenType::Variable => "Variable",
            TokenType::Escape => "Escape",
            TokenType::Group => "Group",
            TokenType::Class => "Class",
            TokenType::Quantifier => "Quantifier",
            TokenType::Anchor => "Anchor",
            TokenType::RegexOperator => "RegexOperator",
            TokenType::MatchPrimary => "MatchPrimary",
            TokenType::MatchAlternate => "MatchAlternate",
            TokenType::Default => "Default",
        }
    }

    /// Parse a token type from a string name (for TOML theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}
