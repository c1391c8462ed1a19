//! JSON and JSON Schema definitions

use crate::syntax::language::LanguageDefinition;
use crate::syntax::mode::Mode;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Keys that belong to the JSON Schema vocabulary
const SCHEMA_KEYS: &str = r"\$schema|type|properties|required|items|enum|pattern|additionalProperties|minLength|maxLength|minimum|maximum";

/// Create the structured-data (JSON) definition
pub fn json_language() -> LanguageDefinition {
    json_like(Mode::StructuredData)
}

/// Create the JSON Schema definition
///
/// Identical to JSON except that a vocabulary key in key position is
/// a keyword rather than a string.
pub fn schema_language() -> LanguageDefinition {
    json_like(Mode::Schema)
}

fn json_like(mode: Mode) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(mode);

    // Schema keys (must precede the string rule)
    if mode == Mode::Schema {
        let pattern = format!(r#"(?P<tok>"(?:{SCHEMA_KEYS})")\s*:"#);
        if let Some(rule) = PatternRule::new("schema_key", &pattern, TokenType::Keyword) {
            lang.add_pattern(rule);
        }
    }

    if let Some(rule) = PatternRule::new("string", r#""(?:\\.|[^"\\])*""#, TokenType::String) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("number", r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?", TokenType::Number) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("literal", r"(?:true|false|null)\b", TokenType::Keyword) {
        lang.add_pattern(rule);
    }

    // Bare words are not JSON; keep them whole so `xtrue` is not half keyword
    if let Some(rule) = PatternRule::new("bareword", r"[A-Za-z_]\w*", TokenType::Default) {
        lang.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("punctuation", r"[\[\]{}:,]", TokenType::Operator) {
        lang.add_pattern(rule);
    }

    lang
}
