//! Grammar identifiers
//!
//! Each editor field names the grammar it is written in. Both the
//! generic tag (`path-query`) and the tool-specific tag (`xpath`) are
//! accepted.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// JSON documents
    StructuredData,
    /// JSON Schema documents (schema vocabulary keys are keywords)
    Schema,
    /// XPath expressions
    PathQuery,
    /// JMESPath expressions
    JmesPath,
    /// TextFSM templates
    TextFsm,
    /// TTP templates
    Ttp,
    /// Jinja2 templates
    TemplatedText,
    /// Python code
    ScriptingCode,
    /// Regular expression patterns
    Regex,
    /// No highlighting
    Plain,
}

impl Mode {
    /// Every mode, in declaration order
    pub const ALL: [Mode; 10] = [
        Mode::StructuredData,
        Mode::Schema,
        Mode::PathQuery,
        Mode::JmesPath,
        Mode::TextFsm,
        Mode::Ttp,
        Mode::TemplatedText,
        Mode::ScriptingCode,
        Mode::Regex,
        Mode::Plain,
    ];

    /// Canonical tag for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::StructuredData => "structured-data",
            Mode::Schema => "json-schema",
            Mode::PathQuery => "path-query",
            Mode::JmesPath => "jmespath",
            Mode::TextFsm => "textfsm",
            Mode::Ttp => "ttp",
            Mode::TemplatedText => "templated-text",
            Mode::ScriptingCode => "scripting-code",
            Mode::Regex => "regex",
            Mode::Plain => "plain",
        }
    }

    /// Look a mode up by canonical tag or tool alias (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let mode = match name.trim().to_ascii_lowercase().as_str() {
            "structured-data" | "json" => Mode::StructuredData,
            "json-schema" | "schema" => Mode::Schema,
            "path-query" | "xpath" => Mode::PathQuery,
            "jmespath" => Mode::JmesPath,
            "textfsm" => Mode::TextFsm,
            "ttp" => Mode::Ttp,
            "templated-text" | "jinja2" | "jinja" => Mode::TemplatedText,
            "scripting-code" | "python" => Mode::ScriptingCode,
            "regex" => Mode::Regex,
            "plain" => Mode::Plain,
            _ => return None,
        };
        Some(mode)
    }

    /// Whether this mode is driven by a rule table
    pub fn is_rule_driven(&self) -> bool {
        !matches!(self, Mode::Regex | Mode::Plain)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown mode tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_tool_aliases() {
        assert_eq!(Mode::from_name("json"), Some(Mode::StructuredData));
        assert_eq!(Mode::from_name("xpath"), Some(Mode::PathQuery));
        assert_eq!(Mode::from_name("Jinja2"), Some(Mode::TemplatedText));
        assert_eq!(Mode::from_name("python"), Some(Mode::ScriptingCode));
    }

    #[test]
    fn test_unknown_mode() {
        assert_eq!(Mode::from_name("cobol"), None);
        let err = "cobol".parse::<Mode>().unwrap_err();
        assert_eq!(err, UnknownMode("cobol".to_string()));
        assert_eq!(err.to_string(), "unknown mode: cobol");
    }

    #[test]
    fn test_rule_driven() {
        assert!(Mode::StructuredData.is_rule_driven());
        assert!(!Mode::Regex.is_rule_driven());
        assert!(!Mode::Plain.is_rule_driven());
    }
}
